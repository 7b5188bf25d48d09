use super::Expr;
use crate::State;

use plate_sql::stmt::{self, Limit};
use std::{fmt, marker::PhantomData};

/// A query option for a query rooted at (or scoped to) table `T`.
///
/// Options are applied in order. Each one mutates the query being built:
/// its WHERE clause, FROM clause, ORDER BY, LIMIT, body, or the list of
/// subquery columns waiting to be projected.
pub struct Opt<T> {
    apply: Box<dyn FnOnce(&mut State, &mut stmt::Query)>,
    _p: PhantomData<fn() -> T>,
}

impl<T> Opt<T> {
    pub fn from_fn(f: impl FnOnce(&mut State, &mut stmt::Query) + 'static) -> Self {
        Self {
            apply: Box::new(f),
            _p: PhantomData,
        }
    }

    pub fn apply(self, state: &mut State, query: &mut stmt::Query) {
        (self.apply)(state, query)
    }
}

/// A predicate used as an option is ANDed onto the WHERE clause.
///
/// # Panics
///
/// When the query body is no longer a single `SELECT`.
impl<T: 'static> From<Expr<T>> for Opt<T> {
    fn from(expr: Expr<T>) -> Self {
        Opt::from_fn(move |state, query| {
            let expr = expr.build(state);
            query.expect_select_mut().and_filter(expr);
        })
    }
}

impl<T> fmt::Debug for Opt<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Opt").finish_non_exhaustive()
    }
}

/// Limits the number of rows returned.
pub fn limit<T>(count: u64) -> Opt<T> {
    Opt::from_fn(move |_, query| {
        query.limit = Some(Limit::from(count));
    })
}

pub(crate) fn apply_all<T>(
    opts: impl IntoIterator<Item = Opt<T>>,
    state: &mut State,
    query: &mut stmt::Query,
) {
    for opt in opts {
        opt.apply(state, query);
    }
}

/// Collects query options, converting predicates and orderings.
///
/// ```
/// # use plate::{opts, Column, Opt, Table};
/// # struct User;
/// # impl Table for User { const NAME: &'static str = "user"; }
/// let name = Column::<User, String>::new("name");
/// let opts: Vec<Opt<User>> = opts![name.eq("John"), name.asc()];
/// assert_eq!(opts.len(), 2);
/// ```
#[macro_export]
macro_rules! opts {
    () => {
        ::std::vec::Vec::new()
    };
    ( $( $opt:expr ),+ $(,)? ) => {
        ::std::vec![ $( $crate::Opt::from($opt) ),+ ]
    };
}
