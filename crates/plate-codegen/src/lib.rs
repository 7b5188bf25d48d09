//! Generates typed query modules for the `plate` query builder.
//!
//! Input is a [`Config`] listing tables, their belongs-to relations and the
//! junction tables linking them. [`generate`] validates it, derives the
//! reverse relations and returns one Rust source file per table plus the
//! shared `tables.rs` and `mod.rs`.

pub mod config;
pub use config::{ColumnConfig, Config, JunctionConfig, Relation, SchemaConfig, TableConfig};

mod derive;
pub use derive::derive_model;

mod error;
pub use error::{Error, Result};

mod expand;

mod output;
pub use output::{Generated, WriteOptions};

mod relation;

pub mod schema;
use schema::Model;

mod validate;

use indexmap::IndexMap;

/// Generates the query modules described by `config`.
///
/// Nothing is generated when validation fails.
pub fn generate(config: &Config) -> Result<Generated> {
    validate::check_config(config)?;

    let tables = config.tables.iter().map(|table| (&table.schema, false));
    let junctions = config.junctions.iter().map(|junction| (&junction.schema, true));

    let mut models = IndexMap::new();

    for (schema, is_junction) in tables.chain(junctions) {
        let model = Model::from_config(config, schema, is_junction)?;
        models.insert(schema.model.clone(), model);
    }

    validate::check_relations(config, &models)?;

    let accessors = relation::derive(config, &models)?;
    validate::check_names(&models, &accessors)?;

    Ok(expand::generate(&models, &accessors))
}
