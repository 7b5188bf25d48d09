use super::{from_descriptors, introspect_file, Column, Name};
use crate::config::{Config, SchemaConfig};
use crate::{Error, Result};

#[derive(Debug)]
pub(crate) struct Model {
    /// Model name; the marker type and module are named after it
    pub(crate) name: Name,

    /// Database table name
    pub(crate) table: String,

    /// Columns in declaration order
    pub(crate) columns: Vec<Column>,

    /// Junction tables get no relationship accessors
    pub(crate) is_junction: bool,
}

impl Model {
    pub(crate) fn from_config(
        config: &Config,
        schema: &SchemaConfig,
        is_junction: bool,
    ) -> Result<Model> {
        let name = Name::new(&schema.model)?;

        let columns = if !schema.columns.is_empty() {
            from_descriptors(&schema.columns)?
        } else if let Some(source) = &schema.source {
            introspect_file(&config.resolve_path(source), &schema.model)?
        } else {
            return Err(Error::MissingSchema {
                model: schema.model.clone(),
            });
        };

        Ok(Model {
            name,
            table: schema.table.clone(),
            columns,
            is_junction,
        })
    }

    /// Finds a column by SQL name, falling back to the field name.
    pub(crate) fn column(&self, key: &str) -> Option<&Column> {
        self.columns
            .iter()
            .find(|column| column.column == key)
            .or_else(|| self.columns.iter().find(|column| column.field == key))
    }
}
