/// The columns relating two tables: `base.from = target.to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyPair {
    pub from: &'static str,
    pub to: &'static str,
}

impl KeyPair {
    pub const fn new(from: &'static str, to: &'static str) -> Self {
        Self { from, to }
    }
}

/// A many-to-many hop through a junction table.
///
/// `keys` relate the base table to the junction
/// (`base.keys.from = junction.keys.to`) and `target_keys` relate the junction
/// to the target (`junction.target_keys.from = target.target_keys.to`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Junction {
    pub table: &'static str,
    pub keys: KeyPair,
    pub target_keys: KeyPair,
}

/// How a base table reaches a related table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Link {
    /// belongs-to and has-many
    Direct(KeyPair),

    /// many-to-many
    Through(Junction),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinKind {
    Inner,
    LeftOuter,
}

impl From<JoinKind> for plate_sql::stmt::JoinOp {
    fn from(value: JoinKind) -> Self {
        match value {
            JoinKind::Inner => Self::Inner,
            JoinKind::LeftOuter => Self::LeftOuter,
        }
    }
}
