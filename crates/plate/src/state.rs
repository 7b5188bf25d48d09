use crate::Value;

use indexmap::IndexSet;
use plate_sql::stmt::{self, Placeholder};
use std::ops::{Deref, DerefMut};

/// Per-query build context.
///
/// A `State` is created by [`select`](crate::select) for a single query and
/// dropped once the query is serialized. It tracks:
///
/// * the aliases allocated so far, so no two FROM-clause members share one;
/// * the relationship path from the root table to the scope currently being
///   built;
/// * the positional parameters, in the order they were appended;
/// * subquery columns waiting to be added to the projection.
#[derive(Debug)]
pub struct State {
    /// Aliases allocated in this query, in allocation order
    aliases: IndexSet<String>,

    /// Relationship path. The first frame is the root table.
    path: Vec<Frame>,

    /// Positional parameters
    params: Vec<Value>,

    /// Subquery columns, materialized when the query is finished
    pending: Vec<SubqueryColumn>,
}

#[derive(Debug)]
struct Frame {
    alias: String,
}

/// A correlated subquery waiting to be projected as `expr AS alias`.
#[derive(Debug)]
pub(crate) struct SubqueryColumn {
    pub(crate) alias: String,
    pub(crate) expr: stmt::Expr,
}

/// Keeps a relationship scope open; popping the path when dropped.
struct Scope<'a> {
    state: &'a mut State,
}

impl State {
    /// Creates a build context rooted at `table`.
    pub fn new(table: &str) -> Self {
        let mut aliases = IndexSet::new();
        aliases.insert(table.to_owned());

        Self {
            aliases,
            path: vec![Frame {
                alias: table.to_owned(),
            }],
            params: vec![],
            pending: vec![],
        }
    }

    /// Creates the context for a correlated subquery over `table`.
    ///
    /// The nested context takes over the parent's parameters so numbering
    /// continues where the parent left off; [`State::finish_nested`] hands them
    /// back. Every alias of the parent is reserved so the subquery can
    /// reference the parent's tables unambiguously. When the table name itself
    /// is taken the root alias becomes `{parent_alias}_{relationship}`.
    pub(crate) fn nested(&mut self, table: &str, relationship: &str) -> State {
        let mut aliases = self.aliases.clone();

        let root = if aliases.contains(table) {
            let preferred = format!("{}_{relationship}", self.current_alias());
            allocate(&mut aliases, preferred)
        } else {
            aliases.insert(table.to_owned());
            table.to_owned()
        };

        State {
            aliases,
            path: vec![Frame { alias: root }],
            params: std::mem::take(&mut self.params),
            pending: vec![],
        }
    }

    /// Creates the context for another operand of a compound query. It starts
    /// from a fresh alias set but continues the parameter numbering.
    pub(crate) fn sibling(&mut self, table: &str) -> State {
        let mut sibling = State::new(table);
        sibling.params = std::mem::take(&mut self.params);
        sibling
    }

    /// Returns the parameters of a finished nested context to its parent.
    pub(crate) fn finish_nested(&mut self, nested: State) {
        debug_assert!(self.params.is_empty(), "parent appended params while nested");
        debug_assert!(nested.pending.is_empty(), "nested subquery columns not consumed");

        self.params = nested.params;
    }

    /// The alias of the table the current scope refers to.
    pub fn current_alias(&self) -> &str {
        match self.path.last() {
            Some(frame) => &frame.alias,
            None => unreachable!("relationship path always holds the root table"),
        }
    }

    /// Number of relationship scopes currently open.
    pub fn depth(&self) -> usize {
        self.path.len() - 1
    }

    /// Opens a relationship scope named `name`, calls `f` with the new alias,
    /// then closes the scope, including when `f` unwinds.
    ///
    /// Aliases derive from the path: directly under the root the alias is the
    /// relationship name, deeper ones join the names below the root with `_`
    /// (`post -> tags -> posts` gives `tags_posts`).
    pub fn with_relationship<R>(&mut self, name: &str, f: impl FnOnce(&mut State, &str) -> R) -> R {
        let preferred = if self.path.len() == 1 {
            name.to_owned()
        } else {
            format!("{}_{name}", self.current_alias())
        };

        let alias = allocate(&mut self.aliases, preferred);

        self.path.push(Frame {
            alias: alias.clone(),
        });

        let mut scope = Scope { state: self };
        f(&mut *scope, &alias)
    }

    /// Allocates an alias for a junction table, derived from the current
    /// alias. Junction tables are never nesting points, so the path is left
    /// untouched.
    pub fn register_junction(&mut self, table: &str) -> String {
        let preferred = format!("{}_{table}", self.current_alias());
        allocate(&mut self.aliases, preferred)
    }

    /// True if `alias` has been allocated in this query.
    pub fn is_allocated(&self, alias: &str) -> bool {
        self.aliases.contains(alias)
    }

    /// Appends a parameter and returns the placeholder referencing it.
    pub fn param(&mut self, value: impl Into<Value>) -> stmt::Expr {
        let index = self.params.len();
        self.params.push(value.into());
        Placeholder(index).into()
    }

    pub fn params(&self) -> &[Value] {
        &self.params
    }

    pub fn into_params(self) -> Vec<Value> {
        self.params
    }

    pub(crate) fn push_subquery_column(&mut self, alias: String, expr: stmt::Expr) {
        self.pending.push(SubqueryColumn { alias, expr });
    }

    pub(crate) fn take_subquery_columns(&mut self) -> Vec<SubqueryColumn> {
        std::mem::take(&mut self.pending)
    }
}

/// Inserts `preferred`, or the first free `{preferred}_{n}` when it is
/// already taken.
fn allocate(aliases: &mut IndexSet<String>, preferred: String) -> String {
    if aliases.insert(preferred.clone()) {
        return preferred;
    }

    let mut n = 2;

    loop {
        let candidate = format!("{preferred}_{n}");

        if aliases.insert(candidate.clone()) {
            tracing::debug!(%preferred, alias = %candidate, "alias already allocated; using suffix");
            return candidate;
        }

        n += 1;
    }
}

impl Deref for Scope<'_> {
    type Target = State;

    fn deref(&self) -> &State {
        self.state
    }
}

impl DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut State {
        self.state
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.state.path.pop();
    }
}
