use thiserror::Error;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Name already exists")]
    DuplicateName { name: String },

    #[error("API key not found")]
    NotFound { name: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Invalid or missing API key")]
    Unauthorized,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn duplicate_name(name: impl Into<String>) -> Self {
        Self::DuplicateName { name: name.into() }
    }

    pub fn not_found(name: impl Into<String>) -> Self {
        Self::NotFound { name: name.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_name_error() {
        let error = DomainError::duplicate_name("alice");
        assert_eq!(error.to_string(), "Name already exists");
        assert!(matches!(error, DomainError::DuplicateName { ref name } if name == "alice"));
    }

    #[test]
    fn test_not_found_error() {
        let error = DomainError::not_found("bob");
        assert_eq!(error.to_string(), "API key not found");
    }

    #[test]
    fn test_validation_error() {
        let error = DomainError::validation("API key name cannot be empty");
        assert_eq!(error.to_string(), "API key name cannot be empty");
    }

    #[test]
    fn test_unauthorized_error() {
        assert_eq!(
            DomainError::Unauthorized.to_string(),
            "Invalid or missing API key"
        );
    }

    #[test]
    fn test_storage_error() {
        let error = DomainError::storage("lock poisoned");
        assert_eq!(error.to_string(), "Storage error: lock poisoned");
    }
}
