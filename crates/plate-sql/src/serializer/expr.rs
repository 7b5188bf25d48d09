use super::{Comma, Formatter, Period, ToSql};

use crate::stmt;

impl ToSql for &stmt::Expr {
    fn to_sql(self, f: &mut Formatter<'_>) {
        use stmt::Expr::*;

        match self {
            Array(query) => {
                fmt!(f, "ARRAY(" query ")");
            }
            Between(expr) => {
                fmt!(f, expr.expr " BETWEEN " expr.low " AND " expr.high);
            }
            BinaryOp(expr) => {
                fmt!(f, expr.lhs " " expr.op " " expr.rhs);
            }
            Bool(true) => fmt!(f, "TRUE"),
            Bool(false) => fmt!(f, "FALSE"),
            Exists(expr) => {
                fmt!(f, "EXISTS(" expr.subquery ")");
            }
            InList(expr) => {
                let list = Comma(&expr.list);
                fmt!(f, expr.expr " IN (" list ")");
            }
            Int(value) => (*value).to_sql(f),
            IsNull(expr) => {
                if expr.negate {
                    fmt!(f, expr.expr " IS NOT NULL");
                } else {
                    fmt!(f, expr.expr " IS NULL");
                }
            }
            Not(expr) => {
                fmt!(f, "NOT " expr.expr);
            }
            Paren(expr) => {
                fmt!(f, "(" expr ")");
            }
            Param(placeholder) => {
                fmt!(f, "@p" placeholder.0);
            }
            Path(path) => {
                fmt!(f, Period(&path.idents));
            }
            Subquery(query) => {
                fmt!(f, "(" query ")");
            }
        }
    }
}

impl ToSql for stmt::BinaryOp {
    fn to_sql(self, f: &mut Formatter<'_>) {
        f.dst.push_str(match self {
            stmt::BinaryOp::Eq => "=",
            stmt::BinaryOp::Ne => "!=",
            stmt::BinaryOp::Gt => ">",
            stmt::BinaryOp::Ge => ">=",
            stmt::BinaryOp::Lt => "<",
            stmt::BinaryOp::Le => "<=",
            stmt::BinaryOp::Like => "LIKE",
            stmt::BinaryOp::NotLike => "NOT LIKE",
            stmt::BinaryOp::And => "AND",
            stmt::BinaryOp::Or => "OR",
        })
    }
}
