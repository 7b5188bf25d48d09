// @generated by plate-codegen. Do not edit.

use super::tables::{Post, Tag};
use plate::codegen_support::{
    Column, Expr, JoinKind, Junction, KeyPair, Link, Opt, Ordering, Shape, Value,
};

pub fn select(opts: Vec<Opt<Tag>>) -> (String, Vec<Value>) {
    plate::codegen_support::select::<Tag>(opts)
}

pub const ID: Column<Tag, i64> = Column::new("id");
pub const NAME: Column<Tag, String> = Column::new("name");

pub fn order_by(ordering: Ordering<Tag>) -> Opt<Tag> {
    plate::codegen_support::order_by(ordering)
}

pub fn limit(count: u64) -> Opt<Tag> {
    plate::codegen_support::limit(count)
}

pub fn and(exprs: Vec<Expr<Tag>>) -> Expr<Tag> {
    plate::codegen_support::and(exprs)
}

pub fn or(exprs: Vec<Expr<Tag>>) -> Expr<Tag> {
    plate::codegen_support::or(exprs)
}

pub fn not(expr: Expr<Tag>) -> Expr<Tag> {
    plate::codegen_support::not(expr)
}

pub fn with_inner_join() -> Opt<Tag> {
    plate::codegen_support::with_inner_join()
}

pub fn union_all(opts: Vec<Opt<Tag>>) -> Opt<Tag> {
    plate::codegen_support::union_all(opts)
}

pub fn union_distinct(opts: Vec<Opt<Tag>>) -> Opt<Tag> {
    plate::codegen_support::union_distinct(opts)
}

pub fn posts(opts: Vec<Opt<Post>>) -> Opt<Tag> {
    plate::codegen_support::junction_join::<Tag, Post>(
        "posts",
        Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "tag_id"),
            target_keys: KeyPair::new("post_id", "id"),
        },
        JoinKind::LeftOuter,
        opts,
    )
}

pub fn load_posts(opts: Vec<Opt<Post>>) -> Opt<Tag> {
    plate::codegen_support::subquery::<Tag, Post>(
        "posts",
        Link::Through(Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "tag_id"),
            target_keys: KeyPair::new("post_id", "id"),
        }),
        Shape::Array,
        opts,
    )
}

pub fn has_posts(opts: Vec<Opt<Post>>) -> Expr<Tag> {
    plate::codegen_support::exists::<Tag, Post>(
        "posts",
        Link::Through(Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "tag_id"),
            target_keys: KeyPair::new("post_id", "id"),
        }),
        opts,
    )
}
