use rb_tree::TreeError;
use thiserror::Error;

/// Failure of a string or vector run. Tree errors keep their kind but not
/// the rejected item.
#[derive(Debug, Error)]
pub enum StructsError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Encode(#[from] serde_json::Error),
    #[error("line {line}: vector has no coordinates")]
    EmptyVector { line: usize },
    #[error("input holds no vectors")]
    NoVectors,
    #[error("unknown mode {0:?}, expected \"strings\" or \"vectors\"")]
    InvalidMode(String),
    #[error("traversal stopped after {visited} item(s)")]
    Traversal { visited: usize },
    #[error("item already present")]
    Duplicate,
    #[error("item not present")]
    NotFound,
    #[error("tree cannot address another node")]
    CapacityExceeded,
}

impl<T> From<TreeError<T>> for StructsError {
    fn from(err: TreeError<T>) -> Self {
        match err {
            TreeError::Duplicate(_) => StructsError::Duplicate,
            TreeError::NotFound => StructsError::NotFound,
            TreeError::CapacityExceeded(_) => StructsError::CapacityExceeded,
            TreeError::Halted { visited } => StructsError::Traversal { visited },
        }
    }
}
