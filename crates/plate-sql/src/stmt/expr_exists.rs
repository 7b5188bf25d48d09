use super::{Expr, Query};

/// Tests whether a subquery returns any rows.
///
/// # Examples
///
/// ```text
/// exists(subquery)  // EXISTS(SELECT 1 FROM ...)
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ExprExists {
    /// The subquery to check.
    pub subquery: Box<Query>,
}

impl Expr {
    pub fn exists(subquery: impl Into<Query>) -> Expr {
        ExprExists {
            subquery: Box::new(subquery.into()),
        }
        .into()
    }
}

impl From<ExprExists> for Expr {
    fn from(value: ExprExists) -> Self {
        Self::Exists(value)
    }
}
