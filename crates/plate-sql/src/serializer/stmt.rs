use super::{Comma, Delimited, Formatter, ToSql};

use crate::stmt;

impl ToSql for &stmt::Query {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.body self.order_by.as_ref() self.limit.as_ref());
    }
}

impl ToSql for &stmt::QueryBody {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::QueryBody::Select(select) => select.to_sql(f),
            stmt::QueryBody::Compound(compound) => compound.to_sql(f),
        }
    }
}

impl ToSql for &stmt::Compound {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let op = match self.op {
            stmt::SetOp::UnionAll => ") UNION ALL (",
            stmt::SetOp::UnionDistinct => ") UNION DISTINCT (",
        };

        let operands = Delimited(&self.operands, op);
        fmt!(f, "(" operands ")");
    }
}

impl ToSql for &stmt::Select {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let results = Comma(&self.results);

        if self.as_struct {
            fmt!(f, "SELECT AS STRUCT " results);
        } else {
            fmt!(f, "SELECT " results);
        }

        if let Some(from) = &self.from {
            fmt!(f, " FROM " from);
        }

        if let Some(filter) = &self.filter {
            fmt!(f, " WHERE " filter);
        }
    }
}

impl ToSql for &stmt::SelectItem {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::SelectItem::Star => fmt!(f, "*"),
            stmt::SelectItem::DotStar(table) => fmt!(f, table ".*"),
            stmt::SelectItem::Expr { expr, alias } => {
                fmt!(f, expr);

                if let Some(alias) = alias {
                    fmt!(f, " AS " alias);
                }
            }
        }
    }
}

impl ToSql for &stmt::OrderBy {
    fn to_sql(self, f: &mut Formatter<'_>) {
        let exprs = Comma(&self.exprs);
        fmt!(f, " ORDER BY " exprs);
    }
}

impl ToSql for &stmt::OrderByExpr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, &self.expr);

        if let Some(order) = &self.order {
            fmt!(f, " " order);
        }
    }
}

impl ToSql for &stmt::Direction {
    fn to_sql(self, f: &mut Formatter<'_>) {
        match self {
            stmt::Direction::Asc => fmt!(f, "ASC"),
            stmt::Direction::Desc => fmt!(f, "DESC"),
        }
    }
}

impl ToSql for &stmt::Limit {
    fn to_sql(self, f: &mut Formatter<'_>) {
        fmt!(f, " LIMIT " self.count);
    }
}
