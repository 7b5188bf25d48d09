use super::{Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::TableExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::TableExpr::Table(table) => table.to_sql(f),
            stmt::TableExpr::Join(join) => join.to_sql(f),
        }
    }
}

impl ToSql for &stmt::TableRef {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.name);

        match &self.alias {
            Some(alias) if *alias != self.name => fmt!(f, " AS " alias),
            _ => {}
        }
    }
}

impl ToSql for &stmt::Join {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let op = match self.op {
            stmt::JoinOp::Inner => " INNER JOIN ",
            stmt::JoinOp::LeftOuter => " LEFT OUTER JOIN ",
        };

        let right = &self.right;
        let on = &self.on;

        fmt!(f, &self.left op);

        // A join on the right-hand side must be grouped to keep its own ON
        // clause attached to it.
        if right.is_join() {
            fmt!(f, "(" right ")");
        } else {
            fmt!(f, right);
        }

        fmt!(f, " ON " on);
    }
}
