use super::{Ident, Join};

/// A FROM-clause source: a single table or a join tree.
#[derive(Debug, Clone, PartialEq)]
pub enum TableExpr {
    Table(TableRef),
    Join(Box<Join>),
}

/// A table with an optional alias. The alias is only rendered when it
/// differs from the table name.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: Ident,
    pub alias: Option<Ident>,
}

impl TableExpr {
    pub fn table(name: impl Into<Ident>) -> Self {
        TableExpr::Table(TableRef {
            name: name.into(),
            alias: None,
        })
    }

    pub fn aliased(name: impl Into<Ident>, alias: impl Into<Ident>) -> Self {
        TableExpr::Table(TableRef {
            name: name.into(),
            alias: Some(alias.into()),
        })
    }

    pub fn is_join(&self) -> bool {
        matches!(self, TableExpr::Join(_))
    }
}

impl From<TableRef> for TableExpr {
    fn from(value: TableRef) -> Self {
        TableExpr::Table(value)
    }
}
