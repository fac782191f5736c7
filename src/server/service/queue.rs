//! In-memory pairing queue for small talk matchmaking.
//!
//! This module provides the `PairingQueue`, a FIFO of participants waiting to be
//! paired. The queue lives in `AppState`, is shared by every request through an
//! `Arc`, and is lost on restart. A single async mutex guards it and no operation
//! awaits while holding the lock.

use std::collections::VecDeque;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::server::{
    error::queue::QueueError,
    model::queue::{Participant, QueuePolicy},
};

/// Shared FIFO of waiting participants.
///
/// Cloning is cheap and every clone refers to the same queue.
#[derive(Clone)]
pub struct PairingQueue {
    entries: Arc<Mutex<VecDeque<Participant>>>,
    policy: QueuePolicy,
}

impl PairingQueue {
    /// Creates an empty queue with the given admission policy.
    ///
    /// # Arguments
    /// - `policy` - Capacity and duplicate handling
    ///
    /// # Returns
    /// - `PairingQueue` - Empty queue
    pub fn new(policy: QueuePolicy) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::new())),
            policy,
        }
    }

    /// Appends a participant to the back of the queue.
    ///
    /// # Arguments
    /// - `participant` - Participant to enqueue
    ///
    /// # Returns
    /// - `Ok(())` - Participant appended
    /// - `Err(QueueError::Full)` - Queue is at its configured capacity
    /// - `Err(QueueError::Duplicate)` - Participant's user is already waiting and
    ///   duplicates are disabled
    pub async fn add(&self, participant: Participant) -> Result<(), QueueError> {
        let mut entries = self.entries.lock().await;

        if let Some(capacity) = self.policy.capacity {
            if entries.len() >= capacity {
                return Err(QueueError::Full(capacity));
            }
        }

        if !self.policy.allow_duplicates
            && entries.iter().any(|p| p.user_id == participant.user_id)
        {
            return Err(QueueError::Duplicate(participant.user_id));
        }

        entries.push_back(participant);

        Ok(())
    }

    /// Removes and returns the participant at the front of the queue.
    ///
    /// # Returns
    /// - `Some(Participant)` - The longest-waiting participant
    /// - `None` - The queue is empty
    pub async fn pop_left(&self) -> Option<Participant> {
        self.entries.lock().await.pop_front()
    }

    /// Returns a snapshot of the queue in order, front first, without modifying it.
    pub async fn read_all(&self) -> Vec<Participant> {
        self.entries.lock().await.iter().cloned().collect()
    }

    /// Number of waiting participants.
    pub async fn len(&self) -> usize {
        self.entries.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.lock().await.is_empty()
    }
}

impl Default for PairingQueue {
    fn default() -> Self {
        Self::new(QueuePolicy::default())
    }
}
