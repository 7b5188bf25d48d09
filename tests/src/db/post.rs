// @generated by plate-codegen. Do not edit.

use super::tables::{Post, Tag, User};
use plate::codegen_support::{
    Column, DateTime, Expr, JoinKind, Junction, KeyPair, Link, Opt, Ordering, Shape, Utc, Value,
};

pub fn select(opts: Vec<Opt<Post>>) -> (String, Vec<Value>) {
    plate::codegen_support::select::<Post>(opts)
}

pub const ID: Column<Post, i64> = Column::new("id");
pub const USER_ID: Column<Post, i64> = Column::new("user_id");
pub const TITLE: Column<Post, String> = Column::new("title");
pub const CREATED_AT: Column<Post, DateTime<Utc>> = Column::new("created_at");

pub fn order_by(ordering: Ordering<Post>) -> Opt<Post> {
    plate::codegen_support::order_by(ordering)
}

pub fn limit(count: u64) -> Opt<Post> {
    plate::codegen_support::limit(count)
}

pub fn and(exprs: Vec<Expr<Post>>) -> Expr<Post> {
    plate::codegen_support::and(exprs)
}

pub fn or(exprs: Vec<Expr<Post>>) -> Expr<Post> {
    plate::codegen_support::or(exprs)
}

pub fn not(expr: Expr<Post>) -> Expr<Post> {
    plate::codegen_support::not(expr)
}

pub fn with_inner_join() -> Opt<Post> {
    plate::codegen_support::with_inner_join()
}

pub fn union_all(opts: Vec<Opt<Post>>) -> Opt<Post> {
    plate::codegen_support::union_all(opts)
}

pub fn union_distinct(opts: Vec<Opt<Post>>) -> Opt<Post> {
    plate::codegen_support::union_distinct(opts)
}

pub fn author(opts: Vec<Opt<User>>) -> Opt<Post> {
    plate::codegen_support::direct_join::<Post, User>(
        "author",
        KeyPair::new("user_id", "id"),
        JoinKind::Inner,
        opts,
    )
}

pub fn load_author(opts: Vec<Opt<User>>) -> Opt<Post> {
    plate::codegen_support::subquery::<Post, User>(
        "author",
        Link::Direct(KeyPair::new("user_id", "id")),
        Shape::Scalar,
        opts,
    )
}

pub fn has_author(opts: Vec<Opt<User>>) -> Expr<Post> {
    plate::codegen_support::exists::<Post, User>(
        "author",
        Link::Direct(KeyPair::new("user_id", "id")),
        opts,
    )
}

pub fn tags(opts: Vec<Opt<Tag>>) -> Opt<Post> {
    plate::codegen_support::junction_join::<Post, Tag>(
        "tags",
        Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "post_id"),
            target_keys: KeyPair::new("tag_id", "id"),
        },
        JoinKind::LeftOuter,
        opts,
    )
}

pub fn load_tags(opts: Vec<Opt<Tag>>) -> Opt<Post> {
    plate::codegen_support::subquery::<Post, Tag>(
        "tags",
        Link::Through(Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "post_id"),
            target_keys: KeyPair::new("tag_id", "id"),
        }),
        Shape::Array,
        opts,
    )
}

pub fn has_tags(opts: Vec<Opt<Tag>>) -> Expr<Post> {
    plate::codegen_support::exists::<Post, Tag>(
        "tags",
        Link::Through(Junction {
            table: "post_tag",
            keys: KeyPair::new("id", "post_id"),
            target_keys: KeyPair::new("tag_id", "id"),
        }),
        opts,
    )
}
