use crate::Result;

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Generator input: the tables to build query modules for, and the junction
/// tables connecting them.
///
/// ```toml
/// [[tables]]
/// model = "User"
/// table = "user"
/// source = "src/models.rs"
///
/// [[tables]]
/// model = "Post"
/// table = "post"
/// columns = [
///     { field = "id", column = "id", type = "INT64" },
///     { field = "user_id", column = "user_id", type = "INT64" },
/// ]
///
/// [[tables.relations]]
/// name = "author"
/// target = "User"
/// from = "user_id"
/// to = "id"
/// reverse_name = "posts"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tables: Vec<TableConfig>,

    #[serde(default)]
    pub junctions: Vec<JunctionConfig>,

    /// Directory `source` paths are resolved against. Set by
    /// [`Config::from_file`] to the directory holding the file.
    #[serde(skip)]
    pub base_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TableConfig {
    #[serde(flatten)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub relations: Vec<Relation>,
}

/// A junction table. Its two relations point at the tables it connects;
/// their reverse names become the many-to-many accessors.
#[derive(Debug, Clone, Deserialize)]
pub struct JunctionConfig {
    #[serde(flatten)]
    pub schema: SchemaConfig,

    #[serde(default)]
    pub relations: Vec<Relation>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SchemaConfig {
    /// Model name, e.g. `User`. Relations refer to tables by this name.
    pub model: String,

    /// Database table name, e.g. `user`
    pub table: String,

    /// Inline column descriptors
    #[serde(default)]
    pub columns: Vec<ColumnConfig>,

    /// Rust source file holding `struct <model>` with `#[column]` fields.
    /// Only read when `columns` is empty.
    #[serde(default)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ColumnConfig {
    pub field: String,

    /// Fields without a column name are not columns.
    #[serde(default)]
    pub column: Option<String>,

    /// Type tag, e.g. `STRING(MAX)`
    #[serde(default, rename = "type")]
    pub ty: Option<String>,

    /// Rust type the tag is inferred from when `type` is not set
    #[serde(default)]
    pub rust: Option<String>,
}

/// A belongs-to relation declared on a table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Relation {
    /// Accessor name, e.g. `author`
    pub name: String,

    /// Model name of the related table
    pub target: String,

    /// Key on the declaring table
    pub from: String,

    /// Key on the target table
    pub to: String,

    /// Name of the has-many (or many-to-many, for junctions) accessor
    /// generated on the target
    #[serde(default)]
    pub reverse_name: Option<String>,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_toml_str(src: &str) -> Result<Self> {
        Ok(toml::from_str(src)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let src = std::fs::read_to_string(path)?;

        let mut config = Self::from_toml_str(&src)?;
        config.base_dir = path.parent().map(Path::to_path_buf);

        Ok(config)
    }

    pub fn table(mut self, table: TableConfig) -> Self {
        self.tables.push(table);
        self
    }

    pub fn junction(mut self, junction: JunctionConfig) -> Self {
        self.junctions.push(junction);
        self
    }

    pub(crate) fn resolve_path(&self, path: &Path) -> PathBuf {
        match &self.base_dir {
            Some(base) if path.is_relative() => base.join(path),
            _ => path.to_path_buf(),
        }
    }
}

impl TableConfig {
    pub fn new(model: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: SchemaConfig::new(model, table),
            relations: vec![],
        }
    }

    pub fn column(mut self, field: &str, column: &str, ty: &str) -> Self {
        self.schema.columns.push(ColumnConfig::new(field, column, ty));
        self
    }

    pub fn source(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema.source = Some(path.into());
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }
}

impl JunctionConfig {
    pub fn new(model: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            schema: SchemaConfig::new(model, table),
            relations: vec![],
        }
    }

    pub fn column(mut self, field: &str, column: &str, ty: &str) -> Self {
        self.schema.columns.push(ColumnConfig::new(field, column, ty));
        self
    }

    pub fn relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }
}

impl SchemaConfig {
    pub fn new(model: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            model: model.into(),
            table: table.into(),
            columns: vec![],
            source: None,
        }
    }
}

impl ColumnConfig {
    pub fn new(field: &str, column: &str, ty: &str) -> Self {
        Self {
            field: field.to_owned(),
            column: Some(column.to_owned()),
            ty: Some(ty.to_owned()),
            rust: None,
        }
    }
}

impl Relation {
    pub fn new(name: &str, target: &str, from: &str, to: &str) -> Self {
        Self {
            name: name.to_owned(),
            target: target.to_owned(),
            from: from.to_owned(),
            to: to.to_owned(),
            reverse_name: None,
        }
    }

    pub fn reverse(mut self, name: &str) -> Self {
        self.reverse_name = Some(name.to_owned());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_toml() {
        let config = Config::from_toml_str(
            r#"
            [[tables]]
            model = "User"
            table = "user"
            source = "models.rs"

            [[tables]]
            model = "Post"
            table = "post"
            columns = [
                { field = "id", column = "id", type = "INT64" },
                { field = "title", column = "title", rust = "String" },
                { field = "cache" },
            ]

            [[tables.relations]]
            name = "author"
            target = "User"
            from = "user_id"
            to = "id"
            reverse_name = "posts"

            [[junctions]]
            model = "PostTag"
            table = "post_tag"
            columns = [{ field = "post_id", column = "post_id", type = "INT64" }]
            relations = [
                { name = "post", target = "Post", from = "post_id", to = "id" },
            ]
            "#,
        )
        .unwrap();

        assert_eq!(config.tables.len(), 2);
        assert_eq!(config.tables[0].schema.source, Some(PathBuf::from("models.rs")));

        let post = &config.tables[1];
        assert_eq!(post.schema.columns.len(), 3);
        assert_eq!(post.schema.columns[1].rust.as_deref(), Some("String"));
        assert_eq!(post.schema.columns[2].column, None);
        assert_eq!(
            post.relations,
            [Relation::new("author", "User", "user_id", "id").reverse("posts")]
        );

        assert_eq!(config.junctions[0].relations.len(), 1);
        assert_eq!(config.base_dir, None);
    }

    #[test]
    fn relative_sources_resolve_against_base_dir() {
        let mut config = Config::new();
        assert_eq!(config.resolve_path(Path::new("a.rs")), PathBuf::from("a.rs"));

        config.base_dir = Some(PathBuf::from("/work"));
        assert_eq!(
            config.resolve_path(Path::new("src/a.rs")),
            PathBuf::from("/work/src/a.rs")
        );
        assert_eq!(
            config.resolve_path(Path::new("/abs/a.rs")),
            PathBuf::from("/abs/a.rs")
        );
    }

    #[test]
    fn invalid_toml_is_an_error() {
        let err = Config::from_toml_str("[[tables]]\nmodel = 1").unwrap_err();
        assert!(matches!(err, crate::Error::Toml(_)));
    }
}
