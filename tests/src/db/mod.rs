// @generated by plate-codegen. Do not edit.

pub mod tables;
pub use tables::{User, Post, Tag, PostTag};

pub mod user;
pub mod post;
pub mod tag;
pub mod post_tag;
