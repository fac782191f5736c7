use thiserror::Error;

/// Rejections raised by the pairing queue's admission policy.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    /// The queue already holds its configured maximum number of participants.
    #[error("Queue is full (capacity {0})")]
    Full(usize),

    /// The participant is already waiting and duplicates are disabled.
    #[error("User {0} is already in the queue")]
    Duplicate(i32),
}
