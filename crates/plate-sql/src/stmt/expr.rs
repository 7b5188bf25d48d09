use super::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// `lhs BETWEEN low AND high`
    Between(ExprBetween),

    /// Binary expression, including the `AND` / `OR` connectives
    BinaryOp(ExprBinaryOp),

    /// Boolean literal
    Bool(bool),

    /// `EXISTS(subquery)`
    Exists(ExprExists),

    /// In list
    InList(ExprInList),

    /// Integer literal
    Int(i64),

    /// Whether an expression is (or is not) null. This is different from a
    /// binary expression because of how databases treat null comparisons.
    IsNull(ExprIsNull),

    /// Unary negation
    Not(ExprNot),

    /// Explicitly parenthesized expression
    Paren(Box<Expr>),

    /// Positional query parameter
    Param(Placeholder),

    /// A dotted column reference, e.g. `author.email`
    Path(ExprPath),

    /// Scalar subquery, `(SELECT ...)`
    Subquery(Box<Query>),

    /// Array subquery, `ARRAY(SELECT ...)`
    Array(Box<Query>),
}

impl Expr {
    pub fn paren(expr: impl Into<Self>) -> Self {
        Expr::Paren(Box::new(expr.into()))
    }

    pub fn is_paren(&self) -> bool {
        matches!(self, Expr::Paren(_))
    }

    pub fn is_true(&self) -> bool {
        matches!(self, Expr::Bool(true))
    }

    pub fn subquery(query: impl Into<Query>) -> Self {
        Expr::Subquery(Box::new(query.into()))
    }

    pub fn array(query: impl Into<Query>) -> Self {
        Expr::Array(Box::new(query.into()))
    }
}

impl From<bool> for Expr {
    fn from(value: bool) -> Self {
        Expr::Bool(value)
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::Int(value)
    }
}

impl From<Placeholder> for Expr {
    fn from(value: Placeholder) -> Self {
        Expr::Param(value)
    }
}
