use uuid::Uuid;

/// Validation failures in the pure scheduling core. Empty slot lists and
/// all-unavailable days are valid outputs, not errors.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum SchedulerError {
    #[error("invalid service duration: {minutes} minutes (must be positive)")]
    InvalidDuration { minutes: i64 },

    #[error("invalid month: {month} (must be 1..=12)")]
    InvalidMonth { month: u32 },

    #[error("invalid year: {year}")]
    InvalidYear { year: i32 },
}

/// Failures of the appointment store.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("appointment {0} does not exist")]
    NotFound(Uuid),

    #[error("failed to access appointment store: {0}")]
    Io(#[from] std::io::Error),

    #[error("appointment store contains invalid data: {0}")]
    Serde(#[from] serde_json::Error),
}
