use crate::stmt::{apply_all, Opt};
use crate::{JoinKind, Junction, KeyPair, Table};

use plate_sql::stmt::{Expr, Join, JoinOp, Query, TableExpr};

/// Joins the related table `U` directly: `base.from = alias.to`.
///
/// The alias of the joined table comes from the relationship path (see
/// [`State::with_relationship`](crate::State::with_relationship)) and `opts`
/// are applied inside that scope, so predicates in them qualify columns with
/// the new alias.
pub fn direct_join<T: Table, U: Table>(
    relationship: &'static str,
    keys: KeyPair,
    kind: JoinKind,
    opts: impl IntoIterator<Item = Opt<U>>,
) -> Opt<T> {
    let opts: Vec<_> = opts.into_iter().collect();

    Opt::from_fn(move |state, query| {
        let base = state.current_alias().to_owned();

        state.with_relationship(relationship, |state, alias| {
            push_join(
                query,
                kind,
                TableExpr::aliased(U::NAME, alias),
                Expr::eq(Expr::column(&base, keys.from), Expr::column(alias, keys.to)),
            );

            apply_all(opts, state, query);
        });
    })
}

/// Joins the related table `U` through a junction table. Always adds two
/// joins: base to junction, then junction to target.
pub fn junction_join<T: Table, U: Table>(
    relationship: &'static str,
    junction: Junction,
    kind: JoinKind,
    opts: impl IntoIterator<Item = Opt<U>>,
) -> Opt<T> {
    let opts: Vec<_> = opts.into_iter().collect();

    Opt::from_fn(move |state, query| {
        let base = state.current_alias().to_owned();
        let via = state.register_junction(junction.table);

        push_join(
            query,
            kind,
            TableExpr::aliased(junction.table, &via),
            Expr::eq(
                Expr::column(&base, junction.keys.from),
                Expr::column(&via, junction.keys.to),
            ),
        );

        state.with_relationship(relationship, |state, alias| {
            push_join(
                query,
                kind,
                TableExpr::aliased(U::NAME, alias),
                Expr::eq(
                    Expr::column(&via, junction.target_keys.from),
                    Expr::column(alias, junction.target_keys.to),
                ),
            );

            apply_all(opts, state, query);
        });
    })
}

/// Turns the most recently added join into an INNER JOIN. A no-op when the
/// FROM clause has no join.
pub fn with_inner_join<T>() -> Opt<T> {
    Opt::from_fn(|_, query| {
        let select = query.expect_select_mut();

        if let Some(join) = select.from.as_mut().and_then(last_join) {
            join.op = JoinOp::Inner;
        }
    })
}

/// Finds the most recently added join.
///
/// New joins take the previous FROM source as their left child, so the
/// newest join is the root of the tree. A join nested on the right-hand side
/// was added inside that root's scope and is newer still, so the walk follows
/// `right` while it is a join.
fn last_join(from: &mut TableExpr) -> Option<&mut Join> {
    let TableExpr::Join(join) = from else {
        return None;
    };

    if join.right.is_join() {
        return last_join(&mut join.right);
    }

    Some(&mut **join)
}

/// Replaces the FROM source with a join taking it as the left child.
///
/// # Panics
///
/// When the query is not a `SELECT` or has no FROM clause to join onto.
fn push_join(query: &mut Query, kind: JoinKind, right: TableExpr, on: Expr) {
    let select = query.expect_select_mut();

    let Some(left) = select.from.take() else {
        panic!("cannot join `{right:?}`; the query has no FROM clause");
    };

    select.from = Some(
        Join {
            left,
            op: kind.into(),
            right,
            on,
        }
        .into(),
    );
}
