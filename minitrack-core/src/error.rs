//! Error types for collection operations.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Rejected form input. Nothing is mutated when one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please fill in {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Miniatures number must be a non-negative integer, got '{0}'")]
    NotAnInteger(String),

    #[error("Miniatures number must be a non-negative integer, got {0}")]
    Negative(i64),

    #[error("Miniatures number {0} is too large")]
    TooLarge(i64),

    #[error("Army name cannot be empty")]
    BlankArmyName,
}

/// Failure to persist the document.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("I/O error for {}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to serialize document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StoreError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Errors returned by registry, unit and statistics operations.
#[derive(Debug, Error)]
pub enum CollectionError {
    #[error("Army '{0}' already exists")]
    DuplicateArmy(String),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid status '{0}'. Valid options: built, work, painted")]
    InvalidStatus(String),

    #[error("Army not found: {0}")]
    ArmyNotFound(String),

    #[error("Unit '{unit}' not found in army '{army}'")]
    UnitNotFound { army: String, unit: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

impl CollectionError {
    /// True when the targeted army or unit does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            CollectionError::ArmyNotFound(_) | CollectionError::UnitNotFound { .. }
        )
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, CollectionError::Validation(_))
    }

    pub(crate) fn unit_not_found(army: &str, unit: &str) -> Self {
        CollectionError::UnitNotFound {
            army: army.to_string(),
            unit: unit.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_message_lists_fields() {
        let err = ValidationError::MissingFields(vec!["miniatures type", "group name"]);
        assert_eq!(err.to_string(), "Please fill in miniatures type, group name");
    }

    #[test]
    fn test_not_found_classification() {
        assert!(CollectionError::ArmyNotFound("Orcs".into()).is_not_found());
        assert!(CollectionError::unit_not_found("Orcs", "Boyz").is_not_found());
        assert!(!CollectionError::DuplicateArmy("Orcs".into()).is_not_found());
    }

    #[test]
    fn test_validation_converts_into_collection_error() {
        let err: CollectionError = ValidationError::Negative(-3).into();
        assert!(err.is_validation());
        assert!(err.to_string().contains("-3"));
    }
}
