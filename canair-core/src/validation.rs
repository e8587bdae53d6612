/// Minimum accepted password length for registration.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Field-level validation failures, reported to the user synchronously.
/// None of these cause a state transition; the form stays editable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Required field is empty: {0}")]
    MissingField(String),

    #[error("Terms and conditions must be accepted")]
    TermsNotAccepted,

    #[error("Password must be at least 6 characters")]
    PasswordTooShort,

    #[error("Passwords do not match")]
    PasswordMismatch,

    #[error("Origin and destination must be different cities")]
    SameCity,
}

pub type ValidationResult = Result<(), ValidationError>;

/// Check a list of (field name, value) pairs, failing on the first empty one.
pub fn require_all(fields: &[(&str, &str)]) -> ValidationResult {
    for (name, value) in fields {
        if value.trim().is_empty() {
            return Err(ValidationError::MissingField((*name).to_string()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_all_reports_first_missing() {
        let result = require_all(&[("first_name", "Jean"), ("last_name", ""), ("email", "")]);
        assert_eq!(result, Err(ValidationError::MissingField("last_name".to_string())));
    }

    #[test]
    fn test_require_all_rejects_whitespace_only() {
        let result = require_all(&[("email", "   ")]);
        assert_eq!(result, Err(ValidationError::MissingField("email".to_string())));
    }

    #[test]
    fn test_require_all_passes_when_filled() {
        assert!(require_all(&[("email", "jean@email.com"), ("password", "secret")]).is_ok());
    }
}
