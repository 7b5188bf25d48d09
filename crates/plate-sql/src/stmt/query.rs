use super::*;

#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    /// The body of the query. Either a single `SELECT` or a compound of
    /// several queries joined by a set operator.
    pub body: QueryBody,

    /// ORDER BY
    pub order_by: Option<OrderBy>,

    /// LIMIT
    pub limit: Option<Limit>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QueryBody {
    Select(Box<Select>),
    Compound(Compound),
}

/// Queries combined with a set operator, e.g. `(q1) UNION ALL (q2)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Compound {
    pub op: SetOp,
    pub operands: Vec<Query>,
}

impl Query {
    pub fn new(body: impl Into<QueryBody>) -> Self {
        Self {
            body: body.into(),
            order_by: None,
            limit: None,
        }
    }

    #[track_caller]
    pub fn expect_select_mut(&mut self) -> &mut Select {
        match &mut self.body {
            QueryBody::Select(select) => select,
            body => panic!("expected `Select`; actual={body:#?}"),
        }
    }

    /// Appends an ORDER BY term after any existing ones.
    pub fn push_order_by(&mut self, expr: OrderByExpr) {
        match &mut self.order_by {
            Some(order_by) => order_by.exprs.push(expr),
            None => self.order_by = Some(expr.into()),
        }
    }
}

impl From<Select> for QueryBody {
    fn from(value: Select) -> Self {
        QueryBody::Select(Box::new(value))
    }
}

impl From<Compound> for QueryBody {
    fn from(value: Compound) -> Self {
        QueryBody::Compound(value)
    }
}

impl From<Select> for Query {
    fn from(value: Select) -> Self {
        Query::new(value)
    }
}
