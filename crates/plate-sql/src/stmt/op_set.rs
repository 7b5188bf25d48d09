#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SetOp {
    UnionAll,
    UnionDistinct,
}
