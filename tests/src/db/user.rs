// @generated by plate-codegen. Do not edit.

use super::tables::{Post, User};
use plate::codegen_support::{Column, Expr, JoinKind, KeyPair, Link, Opt, Ordering, Shape, Value};

pub fn select(opts: Vec<Opt<User>>) -> (String, Vec<Value>) {
    plate::codegen_support::select::<User>(opts)
}

pub const ID: Column<User, i64> = Column::new("id");
pub const NAME: Column<User, String> = Column::new("name");
pub const EMAIL: Column<User, String> = Column::new("email");

pub fn order_by(ordering: Ordering<User>) -> Opt<User> {
    plate::codegen_support::order_by(ordering)
}

pub fn limit(count: u64) -> Opt<User> {
    plate::codegen_support::limit(count)
}

pub fn and(exprs: Vec<Expr<User>>) -> Expr<User> {
    plate::codegen_support::and(exprs)
}

pub fn or(exprs: Vec<Expr<User>>) -> Expr<User> {
    plate::codegen_support::or(exprs)
}

pub fn not(expr: Expr<User>) -> Expr<User> {
    plate::codegen_support::not(expr)
}

pub fn with_inner_join() -> Opt<User> {
    plate::codegen_support::with_inner_join()
}

pub fn union_all(opts: Vec<Opt<User>>) -> Opt<User> {
    plate::codegen_support::union_all(opts)
}

pub fn union_distinct(opts: Vec<Opt<User>>) -> Opt<User> {
    plate::codegen_support::union_distinct(opts)
}

pub fn posts(opts: Vec<Opt<Post>>) -> Opt<User> {
    plate::codegen_support::direct_join::<User, Post>(
        "posts",
        KeyPair::new("id", "user_id"),
        JoinKind::LeftOuter,
        opts,
    )
}

pub fn load_posts(opts: Vec<Opt<Post>>) -> Opt<User> {
    plate::codegen_support::subquery::<User, Post>(
        "posts",
        Link::Direct(KeyPair::new("id", "user_id")),
        Shape::Array,
        opts,
    )
}

pub fn has_posts(opts: Vec<Opt<Post>>) -> Expr<User> {
    plate::codegen_support::exists::<User, Post>(
        "posts",
        Link::Direct(KeyPair::new("id", "user_id")),
        opts,
    )
}
