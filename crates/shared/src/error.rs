//! Error types for Waybill

use thiserror::Error;

/// Coarse classification of a [`LogisticsError`]
///
/// Callers branch on the kind, not on the message text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Blank or malformed input, out-of-bounds priority, wrong center passed
    InvalidArgument,
    /// Duplicate identity or a shipment that is already placed somewhere
    Conflict,
    /// Lookup miss by identifier
    NotFound,
    /// Illegal transition or operation on an entity in the wrong state
    InvalidState,
    /// Caller contract violation at construction time
    Usage,
    /// Storage failure that is not a lookup miss
    Repository,
}

/// Errors raised by a repository implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    /// No entity stored under this identifier
    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    /// The backing store failed
    #[error("Persistence error: {message}")]
    Persistence { message: String },
}

/// General Waybill error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogisticsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("{entity} '{id}' not found")]
    NotFound { entity: &'static str, id: String },

    #[error("Transition not allowed: from {from} to {to}")]
    InvalidTransition { from: String, to: String },

    #[error("Invalid state: {0}")]
    InvalidState(String),

    #[error("Usage error: {0}")]
    Usage(String),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl LogisticsError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn not_found(entity: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity,
            id: id.into(),
        }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        Self::InvalidState(message.into())
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::Usage(message.into())
    }

    /// Classify this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            LogisticsError::InvalidArgument(_) => ErrorKind::InvalidArgument,
            LogisticsError::Conflict(_) => ErrorKind::Conflict,
            LogisticsError::NotFound { .. } => ErrorKind::NotFound,
            LogisticsError::InvalidTransition { .. } | LogisticsError::InvalidState(_) => {
                ErrorKind::InvalidState
            }
            LogisticsError::Usage(_) => ErrorKind::Usage,
            LogisticsError::Repository(RepositoryError::NotFound { .. }) => ErrorKind::NotFound,
            LogisticsError::Repository(_) => ErrorKind::Repository,
        }
    }
}

pub type Result<T> = std::result::Result<T, LogisticsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transition_is_invalid_state() {
        let err = LogisticsError::InvalidTransition {
            from: "REGISTERED".to_string(),
            to: "DELIVERED".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::InvalidState);
        assert_eq!(
            err.to_string(),
            "Transition not allowed: from REGISTERED to DELIVERED"
        );
    }

    #[test]
    fn test_repository_not_found_maps_to_not_found() {
        let err: LogisticsError = RepositoryError::NotFound {
            entity: "shipment",
            id: "ABC123".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "shipment 'ABC123' not found");

        let err: LogisticsError = RepositoryError::Persistence {
            message: "lock poisoned".to_string(),
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::Repository);
    }

    #[test]
    fn test_usage_and_argument_stay_distinct() {
        assert_eq!(LogisticsError::usage("x").kind(), ErrorKind::Usage);
        assert_eq!(
            LogisticsError::invalid_argument("x").kind(),
            ErrorKind::InvalidArgument
        );
    }
}
