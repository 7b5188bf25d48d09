use super::{Expr, Ordering};
use crate::{Table, Value};

use chrono::{DateTime, NaiveDate, Utc};

use plate_sql::stmt::{self, BinaryOp, Direction};
use std::{fmt, marker::PhantomData};

/// A typed reference to a column of table `T` holding values of type `V`.
///
/// Both type parameters are compile-time tags: comparing a column against a
/// value of the wrong type, or using a column in an option for a different
/// table, does not compile. The column name is the only runtime payload.
pub struct Column<T, V> {
    name: &'static str,
    _p: PhantomData<fn() -> (T, V)>,
}

impl<T, V> Column<T, V> {
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            _p: PhantomData,
        }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub fn asc(&self) -> Ordering<T> {
        Ordering::new(self.name, Some(Direction::Asc))
    }

    pub fn desc(&self) -> Ordering<T> {
        Ordering::new(self.name, Some(Direction::Desc))
    }
}

impl<T: Table, V: Into<Value> + 'static> Column<T, V> {
    pub fn eq(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Eq, value.into())
    }

    pub fn ne(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Ne, value.into())
    }

    /// `column IN (...)`, one parameter per value. An empty list matches
    /// nothing and renders as `FALSE`.
    pub fn in_list<I>(&self, values: impl IntoIterator<Item = I>) -> Expr<T>
    where
        I: Into<V>,
    {
        let name = self.name;
        let values: Vec<V> = values.into_iter().map(Into::into).collect();

        Expr::from_fn(move |state| {
            if values.is_empty() {
                return stmt::Expr::Bool(false);
            }

            let column = stmt::Expr::column(state.current_alias(), name);
            let list: Vec<_> = values.into_iter().map(|value| state.param(value)).collect();
            stmt::Expr::in_list(column, list)
        })
    }

    pub fn is_null(&self) -> Expr<T> {
        let name = self.name;
        Expr::from_fn(move |state| stmt::Expr::is_null(stmt::Expr::column(state.current_alias(), name)))
    }

    pub fn is_not_null(&self) -> Expr<T> {
        let name = self.name;
        Expr::from_fn(move |state| {
            stmt::Expr::is_not_null(stmt::Expr::column(state.current_alias(), name))
        })
    }

    fn compare(&self, op: BinaryOp, value: V) -> Expr<T> {
        let name = self.name;

        Expr::from_fn(move |state| {
            let column = stmt::Expr::column(state.current_alias(), name);
            let param = state.param(value);
            stmt::Expr::binary_op(column, op, param)
        })
    }
}

/// Range predicates need an orderable value type. Every scalar column type
/// qualifies; array columns do not.
impl<T: Table, V: Orderable> Column<T, V> {
    pub fn lt(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Lt, value.into())
    }

    pub fn gt(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Gt, value.into())
    }

    pub fn le(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Le, value.into())
    }

    pub fn ge(&self, value: impl Into<V>) -> Expr<T> {
        self.compare(BinaryOp::Ge, value.into())
    }

    /// `column BETWEEN low AND high`, inclusive on both ends.
    pub fn between(&self, low: impl Into<V>, high: impl Into<V>) -> Expr<T> {
        let name = self.name;
        let (low, high) = (low.into(), high.into());

        Expr::from_fn(move |state| {
            let column = stmt::Expr::column(state.current_alias(), name);
            let low = state.param(low);
            let high = state.param(high);
            stmt::Expr::between(column, low, high)
        })
    }
}

/// Pattern matching is only offered on text columns.
impl<T: Table> Column<T, String> {
    pub fn like(&self, pattern: impl Into<String>) -> Expr<T> {
        self.compare(BinaryOp::Like, pattern.into())
    }

    pub fn not_like(&self, pattern: impl Into<String>) -> Expr<T> {
        self.compare(BinaryOp::NotLike, pattern.into())
    }
}

impl<T, V> Clone for Column<T, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T, V> Copy for Column<T, V> {}

impl<T, V> fmt::Debug for Column<T, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Column").field(&self.name).finish()
    }
}

/// Value types with a total order in SQL.
pub trait Orderable: Into<Value> + 'static + sealed::Sealed {}

impl Orderable for String {}
impl Orderable for i64 {}
impl Orderable for f64 {}
impl Orderable for bool {}
impl Orderable for Vec<u8> {}
impl Orderable for DateTime<Utc> {}
impl Orderable for NaiveDate {}

mod sealed {
    pub trait Sealed {}

    impl Sealed for String {}
    impl Sealed for i64 {}
    impl Sealed for f64 {}
    impl Sealed for bool {}
    impl Sealed for Vec<u8> {}
    impl Sealed for chrono::DateTime<chrono::Utc> {}
    impl Sealed for chrono::NaiveDate {}
}
