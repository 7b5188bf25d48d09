use std::path::PathBuf;

/// Errors raised while loading a generator config or generating code.
///
/// Validation errors are reported before any file is produced.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("duplicate table: {0}")]
    DuplicateTable(String),

    #[error("junction table {table} must have exactly 2 relations, got {count}")]
    JunctionArity { table: String, count: usize },

    #[error("relation `{relation}` of {table} targets unknown table {target}")]
    UnknownTarget {
        table: String,
        relation: String,
        target: String,
    },

    #[error("relation `{relation}` of {table}: {owner} has no column `{key}`")]
    UnknownKey {
        table: String,
        relation: String,
        owner: String,
        key: String,
    },

    #[error("{table}: generated name `{name}` conflicts with another item")]
    ConflictingName { table: String, name: String },

    #[error("`{0}` is not a valid identifier")]
    InvalidName(String),

    #[error("{model} has no columns; set `columns` or `source`")]
    MissingSchema { model: String },

    #[error("struct {model} not found in {}", path.display())]
    ModelNotFound { model: String, path: PathBuf },

    #[error("failed to parse Rust source: {0}")]
    Syn(#[from] syn::Error),

    #[error("failed to parse config: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl Error {
    pub fn is_duplicate_table(&self) -> bool {
        matches!(self, Error::DuplicateTable(_))
    }

    pub fn is_junction_arity(&self) -> bool {
        matches!(self, Error::JunctionArity { .. })
    }

    pub fn is_unknown_target(&self) -> bool {
        matches!(self, Error::UnknownTarget { .. })
    }

    pub fn is_unknown_key(&self) -> bool {
        matches!(self, Error::UnknownKey { .. })
    }

    pub fn is_conflicting_name(&self) -> bool {
        matches!(self, Error::ConflictingName { .. })
    }

    /// True for errors detected by checking the config, as opposed to
    /// failures reading or parsing inputs.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::DuplicateTable(_)
                | Error::JunctionArity { .. }
                | Error::UnknownTarget { .. }
                | Error::UnknownKey { .. }
                | Error::ConflictingName { .. }
                | Error::InvalidName(_)
                | Error::MissingSchema { .. }
        )
    }
}
