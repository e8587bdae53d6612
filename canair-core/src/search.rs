use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::validation::{require_all, ValidationError, ValidationResult};

/// Search criteria entered on the home page. Starts empty, is mutated by user
/// input, and is consumed when the flow moves to the flight list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchCriteria {
    pub origin: String,
    pub destination: String,
    pub date: Option<NaiveDate>, // Just date, no time component for search
    pub passenger_count: u32,
}

impl Default for SearchCriteria {
    fn default() -> Self {
        Self {
            origin: String::new(),
            destination: String::new(),
            date: None,
            passenger_count: 1,
        }
    }
}

impl SearchCriteria {
    pub fn new() -> Self {
        Self::default()
    }

    /// All three search fields are required; origin and destination must
    /// differ; the passenger count must be positive.
    pub fn validate(&self) -> ValidationResult {
        require_all(&[
            ("origin", &self.origin),
            ("destination", &self.destination),
        ])?;
        if self.date.is_none() {
            return Err(ValidationError::MissingField("date".to_string()));
        }
        if self.origin.trim() == self.destination.trim() {
            return Err(ValidationError::SameCity);
        }
        if self.passenger_count == 0 {
            return Err(ValidationError::MissingField("passenger_count".to_string()));
        }
        Ok(())
    }
}

/// A single bookable flight option as shown in the results list. Catalog
/// entries are immutable; times and duration are display strings, matching
/// what the results page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlightOffer {
    pub id: String,
    pub origin: String,
    pub destination: String,
    pub departure_time: String,
    pub arrival_time: String,
    pub duration_label: String,
    pub price_cdf: u32,
    pub aircraft: String,
    pub available_seats: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> SearchCriteria {
        SearchCriteria {
            origin: "Kinshasa".to_string(),
            destination: "Lubumbashi".to_string(),
            date: NaiveDate::from_ymd_opt(2024, 5, 27),
            passenger_count: 1,
        }
    }

    #[test]
    fn test_valid_criteria_pass() {
        assert!(filled().validate().is_ok());
    }

    #[test]
    fn test_empty_origin_is_missing_field() {
        let mut criteria = filled();
        criteria.origin.clear();
        assert_eq!(
            criteria.validate(),
            Err(ValidationError::MissingField("origin".to_string()))
        );
    }

    #[test]
    fn test_unset_date_is_missing_field() {
        let mut criteria = filled();
        criteria.date = None;
        assert_eq!(
            criteria.validate(),
            Err(ValidationError::MissingField("date".to_string()))
        );
    }

    #[test]
    fn test_same_city_rejected() {
        let mut criteria = filled();
        criteria.destination = "Kinshasa".to_string();
        assert_eq!(criteria.validate(), Err(ValidationError::SameCity));
    }

    #[test]
    fn test_zero_passengers_rejected() {
        let mut criteria = filled();
        criteria.passenger_count = 0;
        assert!(criteria.validate().is_err());
    }

    #[test]
    fn test_criteria_deserialization() {
        let json = r#"
            {
                "origin": "Kinshasa",
                "destination": "Lubumbashi",
                "date": "2024-05-27",
                "passenger_count": 1
            }
        "#;
        let criteria: SearchCriteria = serde_json::from_str(json).expect("Failed to deserialize");
        assert_eq!(criteria.origin, "Kinshasa");
        assert_eq!(criteria.date, NaiveDate::from_ymd_opt(2024, 5, 27));
    }
}
