use crate::model::small_talk::ParticipantDto;

/// Opaque participant token held by the pairing queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub user_id: i32,
    pub username: Option<String>,
}

impl Participant {
    pub fn new(user_id: i32) -> Self {
        Self {
            user_id,
            username: None,
        }
    }

    pub fn with_username(user_id: i32, username: impl Into<String>) -> Self {
        Self {
            user_id,
            username: Some(username.into()),
        }
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            user_id: self.user_id,
            username: self.username,
        }
    }
}

/// Admission policy for the pairing queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueuePolicy {
    /// Maximum number of waiting participants; `None` is unbounded.
    pub capacity: Option<usize>,
    /// Whether a user may wait in the queue more than once.
    pub allow_duplicates: bool,
}

impl Default for QueuePolicy {
    fn default() -> Self {
        Self {
            capacity: None,
            allow_duplicates: true,
        }
    }
}
