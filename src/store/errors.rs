//! # Store Errors

use thiserror::Error;

use crate::record::RecordId;

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Record store errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// No record with this identity
    #[error("Record not found: {0}")]
    NotFound(RecordId),

    /// Identity already present in the store
    #[error("Duplicate record id: {0}")]
    DuplicateId(RecordId),

    /// Draft tried to assign the identity field
    #[error("Record identity cannot be assigned or changed")]
    IdentityImmutable,
}

impl StoreError {
    /// Stable error code for responses
    pub fn code(&self) -> &'static str {
        match self {
            StoreError::NotFound(_) => "ROSTER_RECORD_NOT_FOUND",
            StoreError::DuplicateId(_) => "ROSTER_DUPLICATE_ID",
            StoreError::IdentityImmutable => "ROSTER_IDENTITY_IMMUTABLE",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = StoreError::NotFound(RecordId::new("42"));
        assert_eq!(err.to_string(), "Record not found: 42");
        assert_eq!(err.code(), "ROSTER_RECORD_NOT_FOUND");
    }
}
