// @generated by plate-codegen. Do not edit.

use plate::codegen_support::Table;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct User;

impl Table for User {
    const NAME: &'static str = "user";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Post;

impl Table for Post {
    const NAME: &'static str = "post";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tag;

impl Table for Tag {
    const NAME: &'static str = "tag";
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PostTag;

impl Table for PostTag {
    const NAME: &'static str = "post_tag";
}
