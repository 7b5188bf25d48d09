#[derive(Debug, Clone, PartialEq)]
pub struct Limit {
    /// Maximum number of rows to return
    pub count: u64,
}

impl From<u64> for Limit {
    fn from(count: u64) -> Self {
        Self { count }
    }
}
