// @generated by plate-codegen. Do not edit.

use super::tables::PostTag;
use plate::codegen_support::{Column, Expr, Opt, Ordering, Value};

pub fn select(opts: Vec<Opt<PostTag>>) -> (String, Vec<Value>) {
    plate::codegen_support::select::<PostTag>(opts)
}

pub const POST_ID: Column<PostTag, i64> = Column::new("post_id");
pub const TAG_ID: Column<PostTag, i64> = Column::new("tag_id");

pub fn order_by(ordering: Ordering<PostTag>) -> Opt<PostTag> {
    plate::codegen_support::order_by(ordering)
}

pub fn limit(count: u64) -> Opt<PostTag> {
    plate::codegen_support::limit(count)
}

pub fn and(exprs: Vec<Expr<PostTag>>) -> Expr<PostTag> {
    plate::codegen_support::and(exprs)
}

pub fn or(exprs: Vec<Expr<PostTag>>) -> Expr<PostTag> {
    plate::codegen_support::or(exprs)
}

pub fn not(expr: Expr<PostTag>) -> Expr<PostTag> {
    plate::codegen_support::not(expr)
}

pub fn with_inner_join() -> Opt<PostTag> {
    plate::codegen_support::with_inner_join()
}

pub fn union_all(opts: Vec<Opt<PostTag>>) -> Opt<PostTag> {
    plate::codegen_support::union_all(opts)
}

pub fn union_distinct(opts: Vec<Opt<PostTag>>) -> Opt<PostTag> {
    plate::codegen_support::union_distinct(opts)
}
