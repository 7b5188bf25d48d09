use crate::State;

use plate_sql::stmt;
use std::{fmt, marker::PhantomData, ops};

/// A boolean predicate over the table `T`.
///
/// An `Expr` is a deferred builder: nothing is evaluated until the
/// expression is applied to a query, at which point it reads the alias of the
/// scope it is applied in and appends its parameters to the build context.
/// Parameters are therefore numbered in application order.
pub struct Expr<T> {
    build: Box<dyn FnOnce(&mut State) -> stmt::Expr>,
    _p: PhantomData<fn() -> T>,
}

impl<T> Expr<T> {
    pub fn from_fn(f: impl FnOnce(&mut State) -> stmt::Expr + 'static) -> Self {
        Self {
            build: Box::new(f),
            _p: PhantomData,
        }
    }

    /// An expression that does not depend on the build context.
    pub fn from_untyped(untyped: impl Into<stmt::Expr>) -> Self {
        let untyped = untyped.into();
        Self::from_fn(move |_| untyped)
    }

    /// Builds the untyped expression against `state`.
    pub fn build(self, state: &mut State) -> stmt::Expr {
        (self.build)(state)
    }

    pub fn and(self, rhs: Expr<T>) -> Self
    where
        T: 'static,
    {
        and([self, rhs])
    }

    pub fn or(self, rhs: Expr<T>) -> Self
    where
        T: 'static,
    {
        or([self, rhs])
    }

    #[allow(clippy::should_implement_trait)]
    pub fn not(self) -> Self
    where
        T: 'static,
    {
        not(self)
    }
}

impl<T: 'static> ops::Not for Expr<T> {
    type Output = Self;

    fn not(self) -> Self::Output {
        not(self)
    }
}

impl<T> fmt::Debug for Expr<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Expr").finish_non_exhaustive()
    }
}

/// ANDs the expressions together.
///
/// Operands are combined pairwise from the left and every intermediate
/// result is parenthesized, so `and([a, b, c])` renders as
/// `((a AND b) AND c)`. A single operand is returned unchanged and an empty
/// list is `TRUE`.
pub fn and<T: 'static>(exprs: impl IntoIterator<Item = Expr<T>>) -> Expr<T> {
    logical(stmt::BinaryOp::And, exprs.into_iter().collect(), true)
}

/// ORs the expressions together. Same shape as [`and`]; an empty list is
/// `FALSE`.
pub fn or<T: 'static>(exprs: impl IntoIterator<Item = Expr<T>>) -> Expr<T> {
    logical(stmt::BinaryOp::Or, exprs.into_iter().collect(), false)
}

/// Negates an expression. Parenthesized operands (the output of [`and`] and
/// [`or`]) are negated as is; anything else is wrapped first.
pub fn not<T: 'static>(expr: Expr<T>) -> Expr<T> {
    Expr::from_fn(move |state| {
        let inner = expr.build(state);

        if inner.is_paren() {
            stmt::Expr::not(inner)
        } else {
            stmt::Expr::not(stmt::Expr::paren(inner))
        }
    })
}

fn logical<T: 'static>(op: stmt::BinaryOp, exprs: Vec<Expr<T>>, empty: bool) -> Expr<T> {
    Expr::from_fn(move |state| {
        exprs
            .into_iter()
            .map(|expr| expr.build(state))
            .reduce(|lhs, rhs| stmt::Expr::paren(stmt::Expr::binary_op(lhs, op, rhs)))
            .unwrap_or(stmt::Expr::Bool(empty))
    })
}
