use thiserror::Error;

use crate::Address;

/// Errors returned by [`XorLinkedList`](crate::XorLinkedList) operations.
///
/// Both list errors are caller-attributable and leave the list untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum XorListError {
    /// The address is neither `NOT_FOUND` nor a node allocated in this list.
    #[error("invalid address {0}")]
    InvalidAddress(Address),

    /// The arena cannot grow past its configured node ceiling.
    #[error("out of memory: arena is limited to {max_capacity} nodes")]
    OutOfMemory {
        /// Node ceiling that was hit.
        max_capacity: usize,
    },

    /// An [`ArenaConfig`](crate::ArenaConfig) was rejected.
    #[error("invalid arena config: {0}")]
    InvalidConfig(String),
}

/// Result type for list operations.
pub type Result<T> = std::result::Result<T, XorListError>;
