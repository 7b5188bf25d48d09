use super::Opt;

use plate_sql::stmt::{self, Direction, OrderByExpr, QueryBody};
use std::marker::PhantomData;

/// A column ordering, created by [`Column::asc`](super::Column::asc) and
/// [`Column::desc`](super::Column::desc).
#[derive(Debug)]
pub struct Ordering<T> {
    column: &'static str,
    direction: Option<Direction>,
    _p: PhantomData<fn() -> T>,
}

impl<T> Ordering<T> {
    pub(crate) fn new(column: &'static str, direction: Option<Direction>) -> Self {
        Self {
            column,
            direction,
            _p: PhantomData,
        }
    }
}

/// Orders by the column in the scope the option is applied in. Orderings
/// accumulate in application order.
///
/// After a union the table aliases are out of scope, so the combined query
/// is ordered by the bare output column name.
pub fn order_by<T: 'static>(ordering: Ordering<T>) -> Opt<T> {
    Opt::from_fn(move |state, query| {
        let expr = match query.body {
            QueryBody::Select(_) => stmt::Expr::column(state.current_alias(), ordering.column),
            QueryBody::Compound(_) => stmt::Expr::name(ordering.column),
        };

        query.push_order_by(OrderByExpr {
            expr,
            order: ordering.direction,
        });
    })
}

impl<T: 'static> From<Ordering<T>> for Opt<T> {
    fn from(value: Ordering<T>) -> Self {
        order_by(value)
    }
}
