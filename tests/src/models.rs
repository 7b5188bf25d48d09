use chrono::{DateTime, Utc};
use plate_macros::Model;

#[derive(Debug, Clone, Model)]
pub struct User {
    #[column("id")]
    pub id: i64,

    #[column("name")]
    pub name: String,

    #[column("email")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Model)]
pub struct Post {
    #[column("id")]
    pub id: i64,

    #[column("user_id")]
    pub user_id: i64,

    #[column("title")]
    pub title: String,

    #[column("created_at")]
    pub created_at: DateTime<Utc>,

    /// Filled by `load_author`
    pub author: Option<User>,

    /// Filled by `load_tags`
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, Model)]
pub struct Tag {
    #[column("id")]
    pub id: i64,

    #[column("name", type = "STRING(64)")]
    pub name: String,
}

#[derive(Debug, Clone, Model)]
pub struct PostTag {
    #[column("post_id")]
    pub post_id: i64,

    #[column("tag_id")]
    pub tag_id: i64,
}
