use crate::select::materialize;
use crate::stmt::{apply_all, Expr, Opt};
use crate::{Link, State, Table};

use plate_sql::stmt::{self, Join, JoinOp, Query, Select, SelectItem, TableExpr};

/// Shape of a loaded relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// One related row as a `STRUCT` (belongs-to)
    Scalar,

    /// Related rows as an `ARRAY<STRUCT>` (has-many, many-to-many)
    Array,
}

/// What the correlated subquery selects.
#[derive(Debug, Clone, Copy)]
enum Projection {
    /// `SELECT AS STRUCT target.*`
    Rows,

    /// `SELECT 1`
    One,
}

/// Loads the related `U` rows as an extra result column named after the
/// relationship.
///
/// The column is built from a correlated subquery in an isolated build
/// context and added to the projection when the enclosing query is finished:
///
/// ```text
/// Scalar:  (SELECT AS STRUCT user.* FROM user WHERE user.id = post.user_id) AS author
/// Array:   ARRAY(SELECT AS STRUCT post.* FROM post WHERE post.user_id = user.id) AS posts
/// ```
pub fn subquery<T: Table, U: Table>(
    relationship: &'static str,
    link: Link,
    shape: Shape,
    opts: impl IntoIterator<Item = Opt<U>>,
) -> Opt<T> {
    let opts: Vec<_> = opts.into_iter().collect();

    Opt::from_fn(move |state, _| {
        let query = correlated::<U>(state, relationship, link, Projection::Rows, opts);

        let expr = match shape {
            Shape::Scalar => stmt::Expr::subquery(query),
            Shape::Array => stmt::Expr::array(query),
        };

        state.push_subquery_column(relationship.to_owned(), expr);
    })
}

/// Matches base rows that have at least one related `U` row satisfying
/// `opts`: `EXISTS(SELECT 1 FROM ... WHERE <correlation> AND ...)`.
pub fn exists<T: Table, U: Table>(
    relationship: &'static str,
    link: Link,
    opts: impl IntoIterator<Item = Opt<U>>,
) -> Expr<T> {
    let opts: Vec<_> = opts.into_iter().collect();

    Expr::from_fn(move |state| {
        let query = correlated::<U>(state, relationship, link, Projection::One, opts);
        stmt::Expr::exists(query)
    })
}

/// Builds a subquery over `U` correlated with the current scope of `state`.
fn correlated<U: Table>(
    state: &mut State,
    relationship: &str,
    link: Link,
    projection: Projection,
    opts: Vec<Opt<U>>,
) -> Query {
    let base = state.current_alias().to_owned();
    let mut nested = state.nested(U::NAME, relationship);
    let alias = nested.current_alias().to_owned();

    let (from, correlation) = match link {
        Link::Direct(keys) => (
            TableExpr::aliased(U::NAME, &alias),
            stmt::Expr::eq(
                stmt::Expr::column(&alias, keys.to),
                stmt::Expr::column(&base, keys.from),
            ),
        ),
        Link::Through(junction) => {
            let via = nested.register_junction(junction.table);

            let join = Join {
                left: TableExpr::aliased(U::NAME, &alias),
                op: JoinOp::Inner,
                right: TableExpr::aliased(junction.table, &via),
                on: stmt::Expr::eq(
                    stmt::Expr::column(&alias, junction.target_keys.to),
                    stmt::Expr::column(&via, junction.target_keys.from),
                ),
            };

            let correlation = stmt::Expr::eq(
                stmt::Expr::column(&via, junction.keys.to),
                stmt::Expr::column(&base, junction.keys.from),
            );

            (join.into(), correlation)
        }
    };

    let mut select = match projection {
        Projection::Rows => {
            let mut select = Select::new([SelectItem::dot_star(&alias)], from);
            select.as_struct = true;
            select
        }
        Projection::One => Select::new([SelectItem::from(stmt::Expr::Int(1))], from),
    };

    select.and_filter(correlation);

    let mut query = Query::from(select);
    apply_all(opts, &mut nested, &mut query);
    materialize(&mut nested, &mut query);

    state.finish_nested(nested);
    query
}
