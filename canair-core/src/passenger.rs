use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{require_all, ValidationError, ValidationResult};

/// Passenger identity captured by the booking form. Discarded after a
/// submission resolves; no durable record is kept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PassengerDetails {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
    pub passport_number: Option<String>,
    pub special_requests: Option<String>,
    pub terms_accepted: bool,
}

impl Default for PassengerDetails {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            date_of_birth: None,
            nationality: "Congolaise".to_string(),
            passport_number: None,
            special_requests: None,
            terms_accepted: false,
        }
    }
}

impl PassengerDetails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Terms acceptance is checked before the field requirements, so an
    /// unticked checkbox is always reported first regardless of other fields.
    pub fn validate(&self) -> ValidationResult {
        if !self.terms_accepted {
            return Err(ValidationError::TermsNotAccepted);
        }
        require_all(&[
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("phone", &self.phone),
        ])?;
        if self.date_of_birth.is_none() {
            return Err(ValidationError::MissingField("date_of_birth".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> PassengerDetails {
        PassengerDetails {
            first_name: "Jean".to_string(),
            last_name: "Mukendi".to_string(),
            email: "jean.mukendi@email.com".to_string(),
            phone: "+243 811 234 567".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15),
            terms_accepted: true,
            ..PassengerDetails::default()
        }
    }

    #[test]
    fn test_valid_details_pass() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_terms_reported_before_missing_fields() {
        // Everything empty AND terms unticked: terms wins.
        let details = PassengerDetails::default();
        assert_eq!(details.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_terms_unticked_fails_even_when_complete() {
        let mut details = filled();
        details.terms_accepted = false;
        assert_eq!(details.validate(), Err(ValidationError::TermsNotAccepted));
    }

    #[test]
    fn test_missing_phone_reported() {
        let mut details = filled();
        details.phone.clear();
        assert_eq!(
            details.validate(),
            Err(ValidationError::MissingField("phone".to_string()))
        );
    }

    #[test]
    fn test_missing_date_of_birth_reported() {
        let mut details = filled();
        details.date_of_birth = None;
        assert_eq!(
            details.validate(),
            Err(ValidationError::MissingField("date_of_birth".to_string()))
        );
    }

    #[test]
    fn test_optional_fields_may_stay_empty() {
        let details = filled();
        assert!(details.passport_number.is_none());
        assert!(details.special_requests.is_none());
        assert!(details.validate().is_ok());
    }
}
