use chrono::{TimeZone, Utc};
use plate::{opts, Value};
use pretty_assertions::assert_eq;
use tests::db::{post, tag, user};

#[test]
fn filter_by_column() {
    let (sql, params) = user::select(opts![user::NAME.eq("John")]);

    assert_eq!(sql, "SELECT user.* FROM user WHERE user.name = @p0");
    assert_eq!(params, [Value::from("John")]);
}

#[test]
fn belongs_to_join_with_ordering_and_limit() {
    let (sql, params) = post::select(opts![
        post::TITLE.like("%rust%"),
        post::author(opts![user::EMAIL.eq("a@example.com")]),
        post::CREATED_AT.desc(),
        post::limit(5),
    ]);

    assert_eq!(
        sql,
        "SELECT post.* FROM post INNER JOIN user AS author ON post.user_id = author.id \
         WHERE post.title LIKE @p0 AND author.email = @p1 \
         ORDER BY post.created_at DESC LIMIT 5"
    );
    assert_eq!(params, [Value::from("%rust%"), Value::from("a@example.com")]);
}

#[test]
fn many_to_many_join_from_both_sides() {
    let (sql, _) = post::select(opts![post::tags(opts![tag::NAME.eq("go")])]);

    assert_eq!(
        sql,
        "SELECT post.* FROM post \
         LEFT OUTER JOIN post_tag AS post_post_tag ON post.id = post_post_tag.post_id \
         LEFT OUTER JOIN tag AS tags ON post_post_tag.tag_id = tags.id \
         WHERE tags.name = @p0"
    );

    let (sql, _) = tag::select(opts![tag::posts(opts![post::TITLE.like("%go%")])]);

    assert_eq!(
        sql,
        "SELECT tag.* FROM tag \
         LEFT OUTER JOIN post_tag AS tag_post_tag ON tag.id = tag_post_tag.tag_id \
         LEFT OUTER JOIN post AS posts ON tag_post_tag.post_id = posts.id \
         WHERE posts.title LIKE @p0"
    );
}

#[test]
fn has_many_exists() {
    let (sql, params) = user::select(opts![user::has_posts(opts![
        post::TITLE.like("%important%")
    ])]);

    assert_eq!(
        sql,
        "SELECT user.* FROM user \
         WHERE EXISTS(SELECT 1 FROM post WHERE post.user_id = user.id AND post.title LIKE @p0)"
    );
    assert_eq!(params, [Value::from("%important%")]);
}

#[test]
fn load_related_rows_as_columns() {
    let (sql, params) = post::select(opts![
        post::load_author(opts![]),
        post::load_tags(opts![tag::NAME.eq("go")]),
        post::TITLE.eq("x"),
    ]);

    assert_eq!(
        sql,
        "SELECT post.*, \
         (SELECT AS STRUCT user.* FROM user WHERE user.id = post.user_id) AS author, \
         ARRAY(SELECT AS STRUCT tag.* FROM tag \
         INNER JOIN post_tag AS tag_post_tag ON tag.id = tag_post_tag.tag_id \
         WHERE tag_post_tag.post_id = post.id AND tag.name = @p0) AS tags \
         FROM post WHERE post.title = @p1"
    );
    assert_eq!(params, [Value::from("go"), Value::from("x")]);
}

#[test]
fn nested_joins_use_path_aliases() {
    let (sql, _) = user::select(opts![user::posts(opts![post::tags(opts![
        tag::NAME.eq("rust")
    ])])]);

    assert_eq!(
        sql,
        "SELECT user.* FROM user \
         LEFT OUTER JOIN post AS posts ON user.id = posts.user_id \
         LEFT OUTER JOIN post_tag AS posts_post_tag ON posts.id = posts_post_tag.post_id \
         LEFT OUTER JOIN tag AS posts_tags ON posts_post_tag.tag_id = posts_tags.id \
         WHERE posts_tags.name = @p0"
    );
}

#[test]
fn combinators_and_inner_join_override() {
    let (sql, params) = user::select(opts![
        user::or(vec![user::NAME.eq("John"), user::NAME.eq("Jane")]),
        user::not(user::has_posts(opts![])),
        user::posts(opts![]),
        user::with_inner_join(),
    ]);

    assert_eq!(
        sql,
        "SELECT user.* FROM user INNER JOIN post AS posts ON user.id = posts.user_id \
         WHERE (user.name = @p0 OR user.name = @p1) \
         AND NOT (EXISTS(SELECT 1 FROM post WHERE post.user_id = user.id))"
    );
    assert_eq!(params, [Value::from("John"), Value::from("Jane")]);
}

#[test]
fn timestamp_range() {
    let since = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();

    let (sql, params) = post::select(opts![post::CREATED_AT.ge(since), post::ID.lt(100)]);

    assert_eq!(
        sql,
        "SELECT post.* FROM post WHERE post.created_at >= @p0 AND post.id < @p1"
    );
    assert_eq!(params, [Value::Timestamp(since), Value::Int64(100)]);
}

#[test]
fn union_of_table_selects() {
    let (sql, params) = tag::select(opts![
        tag::NAME.eq("go"),
        tag::union_distinct(opts![tag::NAME.eq("rust")]),
    ]);

    assert_eq!(
        sql,
        "(SELECT tag.* FROM tag WHERE tag.name = @p0) \
         UNION DISTINCT (SELECT tag.* FROM tag WHERE tag.name = @p1)"
    );
    assert_eq!(params, [Value::from("go"), Value::from("rust")]);
}
