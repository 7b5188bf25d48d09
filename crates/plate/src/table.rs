/// Binds a zero-sized marker type to the canonical SQL name of a table.
///
/// Generated code emits one marker per table:
///
/// ```
/// pub struct User;
///
/// impl plate::Table for User {
///     const NAME: &'static str = "user";
/// }
/// ```
pub trait Table: 'static {
    /// Canonical SQL table name
    const NAME: &'static str;
}
