use serde::{Deserialize, Serialize};
use thiserror::Error;

#[must_use]
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
pub enum HeapError {
    #[error("Invalid argument: {reason}.")]
    InvalidArgument { reason: String },
    #[error("Queue is empty.")]
    EmptyQueue,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = HeapError::InvalidArgument {
            reason: "limit must be positive".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid argument: limit must be positive.");
        assert_eq!(HeapError::EmptyQueue.to_string(), "Queue is empty.");
    }
}
