use thiserror::Error;

/// Error taxonomy of the booking engine.
///
/// The first four variants are the caller-correctable outcomes the engine
/// surfaces to the UI layer; the rest are ambient (lookup failures,
/// malformed input, storage trouble).
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invalid availability window: {0}")]
    InvalidWindow(String),

    #[error("Slot is no longer available")]
    SlotUnavailable,

    #[error("Pack {0} has no usable credit")]
    InsufficientCredit(String),

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Not found: {entity} with {field}={value}")]
    NotFound {
        entity: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("Validation: {0}")]
    Validation(String),

    #[error("Already exists: {0}")]
    Conflict(String),

    #[error("Storage error: {0}")]
    Storage(String),
}

impl DomainError {
    /// Whether this error is likely transient (lock contention, busy
    /// database) and the operation may succeed if retried.
    pub fn is_transient(&self) -> bool {
        match self {
            DomainError::Storage(msg) => {
                let msg = msg.to_ascii_lowercase();
                msg.contains("locked") || msg.contains("busy") || msg.contains("deadlock")
            }
            _ => false,
        }
    }

    pub fn not_found(entity: &'static str, field: &'static str, value: impl ToString) -> Self {
        DomainError::NotFound {
            entity,
            field,
            value: value.to_string(),
        }
    }
}

// ── Tests ──────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locked_storage_error_is_transient() {
        let err = DomainError::Storage("database is locked".to_string());
        assert!(err.is_transient());
    }

    #[test]
    fn business_errors_are_not_transient() {
        assert!(!DomainError::SlotUnavailable.is_transient());
        assert!(!DomainError::InsufficientCredit("p1".into()).is_transient());
        assert!(!DomainError::Storage("no such table: bookings".into()).is_transient());
    }
}
