mod direction;
pub use direction::Direction;

mod expr;
pub use expr::Expr;

mod expr_between;
pub use expr_between::ExprBetween;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_exists;
pub use expr_exists::ExprExists;

mod expr_in_list;
pub use expr_in_list::ExprInList;

mod expr_is_null;
pub use expr_is_null::ExprIsNull;

mod expr_not;
pub use expr_not::ExprNot;

mod expr_path;
pub use expr_path::ExprPath;

mod ident;
pub use ident::Ident;

mod join;
pub use join::{Join, JoinOp};

mod limit;
pub use limit::Limit;

mod op_binary;
pub use op_binary::BinaryOp;

mod op_set;
pub use op_set::SetOp;

mod order_by;
pub use order_by::{OrderBy, OrderByExpr};

mod placeholder;
pub use placeholder::Placeholder;

mod query;
pub use query::{Compound, Query, QueryBody};

mod select;
pub use select::{Select, SelectItem};

mod table_expr;
pub use table_expr::{TableExpr, TableRef};
