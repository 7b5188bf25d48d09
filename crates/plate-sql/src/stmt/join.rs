use super::{Expr, TableExpr};

/// One join in a FROM clause.
///
/// Joins nest through `left`: each new join takes the previous FROM source
/// as its left child, so the most recently added join is the root of the
/// tree and `right` is normally a plain table.
#[derive(Debug, Clone, PartialEq)]
pub struct Join {
    pub left: TableExpr,
    pub op: JoinOp,
    pub right: TableExpr,
    pub on: Expr,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum JoinOp {
    Inner,
    LeftOuter,
}

impl From<Join> for TableExpr {
    fn from(value: Join) -> Self {
        TableExpr::Join(Box::new(value))
    }
}
