use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::error::{Result, SharedError};
use crate::validation::{has_digit, has_special_char, EMAIL_REGEX};

/// Credentials posted to the auth service's login endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(length(min = 1))]
    pub password: String,
}

impl LoginForm {
    pub fn new(username: String, password: String) -> Result<Self> {
        let form = Self { username, password };
        form.validate_fields()?;
        Ok(form)
    }

    pub fn validate_fields(&self) -> Result<()> {
        require("username", &self.username)?;
        require("password", &self.password)?;
        self.validate()
            .map_err(|e| SharedError::Validation(e.to_string()))
    }
}

/// Payload for the auth service's register endpoint.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegistrationForm {
    #[validate(length(min = 1))]
    pub username: String,

    #[validate(regex = "EMAIL_REGEX")]
    pub email: String,

    /// Needs at least one digit and one special character
    #[validate(length(min = 1), custom = "validate_password_strength")]
    pub password: String,
}

impl RegistrationForm {
    pub fn new(username: String, email: String, password: String) -> Result<Self> {
        let form = Self {
            username,
            email,
            password,
        };
        form.validate_fields()?;
        Ok(form)
    }

    pub fn validate_fields(&self) -> Result<()> {
        require("username", &self.username)?;
        require("password", &self.password)?;
        if !EMAIL_REGEX.is_match(&self.email) {
            return Err(SharedError::InvalidEmail(self.email.clone()));
        }
        self.validate()?;
        Ok(())
    }
}

/// Whitespace-only input counts as missing.
fn require(field: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(SharedError::MissingField(field.to_string()));
    }
    Ok(())
}

fn validate_password_strength(password: &str) -> std::result::Result<(), ValidationError> {
    if !has_digit(password) {
        return Err(ValidationError::new("password_missing_digit"));
    }
    if !has_special_char(password) {
        return Err(ValidationError::new("password_missing_special_char"));
    }
    Ok(())
}
