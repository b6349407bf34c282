use thiserror::Error;
use validator::ValidationErrors;
use serde_json::Error as JsonError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Error, Serialize, Deserialize, PartialEq)]
pub enum SharedError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid email format: {0}")]
    InvalidEmail(String),

    #[error("Required field missing: {0}")]
    MissingField(String),

    #[error("Conversion error: {0}")]
    Conversion(String),
}

impl From<ValidationErrors> for SharedError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation(errors.to_string())
    }
}

impl From<JsonError> for SharedError {
    fn from(error: JsonError) -> Self {
        Self::Conversion(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SharedError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_error_becomes_conversion() {
        let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let shared: SharedError = err.into();
        assert!(matches!(shared, SharedError::Conversion(_)));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            SharedError::MissingField("username".to_string()).to_string(),
            "Required field missing: username"
        );
        assert_eq!(
            SharedError::InvalidEmail("bob".to_string()).to_string(),
            "Invalid email format: bob"
        );
    }
}
