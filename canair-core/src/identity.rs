use serde::{Deserialize, Serialize};

use crate::validation::{require_all, ValidationError, ValidationResult, MIN_PASSWORD_LEN};

/// Credentials submitted on the login page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AccountCredentials {
    pub email: String,
    pub password: String,
}

impl AccountCredentials {
    pub fn validate(&self) -> ValidationResult {
        require_all(&[("email", &self.email), ("password", &self.password)])
    }
}

/// Registration payload: credentials plus contact details, the confirmation
/// password, and the terms checkbox.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Registration {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
    pub terms_accepted: bool,
}

impl Registration {
    /// Checked in order: required fields, password match, password length,
    /// terms acceptance.
    pub fn validate(&self) -> ValidationResult {
        require_all(&[
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
            ("password", &self.password),
            ("confirm_password", &self.confirm_password),
        ])?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ValidationError::PasswordTooShort);
        }
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        Ok(())
    }
}
