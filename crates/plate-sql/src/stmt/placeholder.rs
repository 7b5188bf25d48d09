/// Reference to the parameter at the given position, serialized as `@p{n}`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Placeholder(pub usize);
