use thiserror::Error;

/// Failure of a tree operation.
///
/// Variants that reject an item hand it back, so a failed insert never
/// loses the caller's data.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TreeError<T> {
    #[error("item already present")]
    Duplicate(T),
    #[error("item not present")]
    NotFound,
    #[error("tree cannot address another node")]
    CapacityExceeded(T),
    #[error("traversal halted by callback after {visited} item(s)")]
    Halted { visited: usize },
}

impl<T> TreeError<T> {
    /// The rejected item, if this error carries one.
    pub fn into_item(self) -> Option<T> {
        match self {
            TreeError::Duplicate(item) | TreeError::CapacityExceeded(item) => Some(item),
            TreeError::NotFound | TreeError::Halted { .. } => None,
        }
    }
}
