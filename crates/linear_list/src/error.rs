use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ListError {
    #[error("position {position} is outside 1..={bound}")]
    OutOfRange { position: usize, bound: usize },
    #[error("list is full (capacity {capacity})")]
    Full { capacity: usize },
    #[error("list is empty")]
    Empty,
    #[error("node allocation failed")]
    Allocation,
    #[error("node handle is missing, stale or not valid here")]
    InvalidNode,
}
