#[macro_use]
mod fmt;
use fmt::ToSql;

mod delim;
use delim::{Comma, Delimited, Period};

mod ident;

// Fragment serializers
mod expr;
mod stmt;
mod table_expr;

use crate::stmt::Query;

/// Serialize a query to GoogleSQL text.
///
/// Parameters are referenced by name (`@p0`, `@p1`, ...); their values are
/// collected while the query is built, so serialization never allocates
/// new ones.
#[derive(Debug, Default, Clone, Copy)]
pub struct Serializer {
    _priv: (),
}

struct Formatter<'a> {
    /// Where to write the serialized SQL
    dst: &'a mut String,
}

impl Serializer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn serialize(&self, query: &Query) -> String {
        let mut ret = String::new();

        let mut fmt = Formatter { dst: &mut ret };
        query.to_sql(&mut fmt);

        ret
    }
}
