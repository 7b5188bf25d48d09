use super::{Expr, Ident};

/// A dotted path of identifiers, most often `alias.column`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprPath {
    pub idents: Vec<Ident>,
}

impl Expr {
    /// References `column` on the table (or alias) `table`.
    pub fn column(table: impl Into<Ident>, column: impl Into<Ident>) -> Self {
        ExprPath {
            idents: vec![table.into(), column.into()],
        }
        .into()
    }

    /// References `column` without a qualifier, as ORDER BY does over the
    /// output of a compound query.
    pub fn name(column: impl Into<Ident>) -> Self {
        ExprPath {
            idents: vec![column.into()],
        }
        .into()
    }
}

impl From<ExprPath> for Expr {
    fn from(value: ExprPath) -> Self {
        Self::Path(value)
    }
}
