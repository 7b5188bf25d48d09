use crate::stmt::{apply_all, Opt};
use crate::{State, Table, Value};

use plate_sql::stmt::{Compound, Query, QueryBody, Select, SelectItem, SetOp, TableExpr};
use plate_sql::Serializer;

/// Builds `SELECT t.* FROM t` for table `T`, applies `opts` in order and
/// serializes the result.
///
/// Returns the SQL text and the positional parameters; the parameter at
/// index `i` binds `@p{i}`.
pub fn select<T: Table>(opts: impl IntoIterator<Item = Opt<T>>) -> (String, Vec<Value>) {
    let (query, params) = build::<T>(opts);
    let sql = Serializer::new().serialize(&query);

    tracing::debug!(table = T::NAME, %sql, params = params.len(), "built query");

    (sql, params)
}

/// Like [`select`] but returns the statement tree instead of its text.
pub fn build<T: Table>(opts: impl IntoIterator<Item = Opt<T>>) -> (Query, Vec<Value>) {
    let mut state = State::new(T::NAME);
    let mut query = root_query(T::NAME);

    apply_all(opts, &mut state, &mut query);
    materialize(&mut state, &mut query);

    (query, state.into_params())
}

/// Combines the query built so far with a second `SELECT` over `T` using
/// `UNION ALL`. The second query gets its own aliases but shares the
/// parameter list.
///
/// Predicates applied after this option panic: the body is no longer a
/// single `SELECT`. ORDER BY and LIMIT still apply to the combined query.
pub fn union_all<T: Table>(opts: impl IntoIterator<Item = Opt<T>>) -> Opt<T> {
    compound(SetOp::UnionAll, opts.into_iter().collect())
}

/// Same as [`union_all`] with `UNION DISTINCT`.
pub fn union_distinct<T: Table>(opts: impl IntoIterator<Item = Opt<T>>) -> Opt<T> {
    compound(SetOp::UnionDistinct, opts.into_iter().collect())
}

fn compound<T: Table>(op: SetOp, opts: Vec<Opt<T>>) -> Opt<T> {
    Opt::from_fn(move |state, query| {
        // Subquery columns requested so far belong to the left operand.
        materialize(state, query);

        let mut rhs_state = state.sibling(T::NAME);
        let mut rhs = root_query(T::NAME);

        apply_all(opts, &mut rhs_state, &mut rhs);
        materialize(&mut rhs_state, &mut rhs);
        state.finish_nested(rhs_state);

        let lhs = std::mem::replace(
            query,
            Query::new(Compound {
                op,
                operands: vec![],
            }),
        );

        let operands = match lhs {
            Query {
                body: QueryBody::Compound(compound),
                order_by: None,
                limit: None,
            } if compound.op == op => {
                let mut operands = compound.operands;
                operands.push(rhs);
                operands
            }
            lhs => vec![lhs, rhs],
        };

        *query = Query::new(Compound { op, operands });
    })
}

fn root_query(table: &str) -> Query {
    Query::from(Select::new(
        [SelectItem::dot_star(table)],
        TableExpr::table(table),
    ))
}

/// Moves pending subquery columns into the projection as `expr AS alias`.
///
/// # Panics
///
/// When columns are pending and the body is not a single `SELECT`.
pub(crate) fn materialize(state: &mut State, query: &mut Query) {
    let columns = state.take_subquery_columns();

    if columns.is_empty() {
        return;
    }

    let select = query.expect_select_mut();

    for column in columns {
        select.push_result(SelectItem::aliased(column.expr, column.alias));
    }
}
