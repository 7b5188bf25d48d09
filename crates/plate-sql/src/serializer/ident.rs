use super::{Formatter, ToSql};

use crate::stmt::Ident;

/// GoogleSQL reserved keywords. Identifiers matching one of these (case
/// insensitive) must be quoted.
const RESERVED: &[&str] = &[
    "ALL", "AND", "ANY", "ARRAY", "AS", "ASC", "ASSERT_ROWS_MODIFIED", "AT", "BETWEEN", "BY",
    "CASE", "CAST", "COLLATE", "CONTAINS", "CREATE", "CROSS", "CUBE", "CURRENT", "DEFAULT",
    "DEFINE", "DESC", "DISTINCT", "ELSE", "END", "ENUM", "ESCAPE", "EXCEPT", "EXCLUDE",
    "EXISTS", "EXTRACT", "FALSE", "FETCH", "FOLLOWING", "FOR", "FROM", "FULL", "GROUP",
    "GROUPING", "GROUPS", "HASH", "HAVING", "IF", "IGNORE", "IN", "INNER", "INTERSECT",
    "INTERVAL", "INTO", "IS", "JOIN", "LATERAL", "LEFT", "LIKE", "LIMIT", "LOOKUP", "MERGE",
    "NATURAL", "NEW", "NO", "NOT", "NULL", "NULLS", "OF", "ON", "OR", "ORDER", "OUTER", "OVER",
    "PARTITION", "PRECEDING", "PROTO", "QUALIFY", "RANGE", "RECURSIVE", "RESPECT", "RIGHT",
    "ROLLUP", "ROWS", "SELECT", "SET", "SOME", "STRUCT", "TABLESAMPLE", "THEN", "TO", "TREAT",
    "TRUE", "UNBOUNDED", "UNION", "UNNEST", "USING", "WHEN", "WHERE", "WINDOW", "WITH",
    "WITHIN",
];

pub(super) fn needs_quoting(name: &str) -> bool {
    let mut chars = name.chars();

    let valid = match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    };

    !valid || RESERVED.iter().any(|kw| kw.eq_ignore_ascii_case(name))
}

impl ToSql for &Ident {
    fn to_sql(self, f: &mut Formatter<'_>) {
        if needs_quoting(&self.0) {
            f.dst.push('`');
            for c in self.0.chars() {
                if c == '`' || c == '\\' {
                    f.dst.push('\\');
                }
                f.dst.push(c);
            }
            f.dst.push('`');
        } else {
            f.dst.push_str(&self.0);
        }
    }
}
