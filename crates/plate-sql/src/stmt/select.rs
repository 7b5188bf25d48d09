use super::{Expr, Ident, TableExpr};

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    /// Render as `SELECT AS STRUCT`
    pub as_struct: bool,

    /// Result items, in order
    pub results: Vec<SelectItem>,

    /// Source of the rows. `None` for a bare `SELECT <expr>`.
    pub from: Option<TableExpr>,

    /// Query filter
    pub filter: Option<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SelectItem {
    /// `*`
    Star,

    /// `table.*`
    DotStar(Ident),

    /// `expr [AS alias]`
    Expr { expr: Expr, alias: Option<Ident> },
}

impl Select {
    pub fn new(results: impl IntoIterator<Item = SelectItem>, from: impl Into<TableExpr>) -> Self {
        Self {
            as_struct: false,
            results: results.into_iter().collect(),
            from: Some(from.into()),
            filter: None,
        }
    }

    /// ANDs `expr` onto the current filter. No parentheses are added, so
    /// successive calls produce a flat `a AND b AND c` chain. A filter that is
    /// the literal `TRUE` is replaced rather than combined.
    pub fn and_filter(&mut self, expr: Expr) {
        self.filter = Some(match self.filter.take() {
            Some(existing) if expr.is_true() => existing,
            Some(existing) if !existing.is_true() => Expr::and(existing, expr),
            _ => expr,
        });
    }

    pub fn push_result(&mut self, item: SelectItem) {
        self.results.push(item);
    }
}

impl SelectItem {
    pub fn dot_star(table: impl Into<Ident>) -> Self {
        SelectItem::DotStar(table.into())
    }

    pub fn aliased(expr: impl Into<Expr>, alias: impl Into<Ident>) -> Self {
        SelectItem::Expr {
            expr: expr.into(),
            alias: Some(alias.into()),
        }
    }
}

impl From<Expr> for SelectItem {
    fn from(value: Expr) -> Self {
        SelectItem::Expr {
            expr: value,
            alias: None,
        }
    }
}
