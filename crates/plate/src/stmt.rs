mod column;
pub use column::{Column, Orderable};

mod expr;
pub use expr::{and, not, or, Expr};

mod opt;
pub use opt::{limit, Opt};
pub(crate) use opt::apply_all;

mod ordering;
pub use ordering::{order_by, Ordering};
