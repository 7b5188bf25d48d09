mod join;
pub use join::{direct_join, junction_join, with_inner_join};

mod relation;
pub use relation::{JoinKind, Junction, KeyPair, Link};

mod select;
pub use select::{build, select, union_all, union_distinct};

mod state;
pub use state::State;

pub mod stmt;
pub use stmt::{and, limit, not, or, order_by, Column, Expr, Opt, Orderable, Ordering};

mod subquery;
pub use subquery::{exists, subquery, Shape};

mod table;
pub use table::Table;

mod value;
pub use value::Value;

pub use plate_sql as sql;

/// Items referenced by generated query modules.
#[doc(hidden)]
pub mod codegen_support {
    pub use crate::{
        and, direct_join, exists, junction_join, limit, not, or, order_by, select, subquery,
        union_all, union_distinct, with_inner_join, Column, Expr, JoinKind, Junction, KeyPair,
        Link, Opt, Ordering, Shape, Table, Value,
    };

    pub use chrono::{DateTime, NaiveDate, Utc};
}
