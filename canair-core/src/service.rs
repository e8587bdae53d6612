use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use uuid::Uuid;

use crate::identity::{AccountCredentials, Registration};
use crate::passenger::PassengerDetails;
use crate::search::{FlightOffer, SearchCriteria};
use crate::validation::{require_all, ValidationResult};

/// Simulated round-trip durations used by the mock service.
pub const BOOKING_SUBMIT_DELAY: Duration = Duration::from_millis(2000);
pub const LOGIN_DELAY: Duration = Duration::from_millis(1500);
pub const REGISTER_DELAY: Duration = Duration::from_millis(2000);
pub const CONTACT_SEND_DELAY: Duration = Duration::from_millis(2000);

/// Terminal success outcome of a booking submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Confirmation {
    pub id: Uuid,
    pub offer_id: String,
    pub confirmed_at: DateTime<Utc>,
}

/// Result of a successful login or registration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub id: Uuid,
    pub email: String,
    pub started_at: DateTime<Utc>,
}

/// A message sent through the contact page.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub body: String,
}

impl ContactMessage {
    pub fn validate(&self) -> ValidationResult {
        require_all(&[
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.body),
        ])
    }
}

/// Failures crossing the service boundary. The mock never produces these;
/// the variants keep the failure-reporting path wired for a real backend.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ServiceError {
    #[error("Submission failed: {0}")]
    Submission(String),

    #[error("Authentication rejected: {0}")]
    Rejected(String),
}

/// The external boundary of the booking flow. Every form depends on this
/// trait only; the shipped implementation is [`MockReservationService`].
#[async_trait]
pub trait ReservationService: Send + Sync {
    /// Return the offers available for the given criteria.
    async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, ServiceError>;

    /// Submit a booking for the selected offer.
    async fn submit_booking(
        &self,
        details: &PassengerDetails,
        offer_id: &str,
    ) -> Result<Confirmation, ServiceError>;

    /// Authenticate an existing account.
    async fn authenticate(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<Session, ServiceError>;

    /// Create a new account.
    async fn register(&self, registration: &Registration) -> Result<Session, ServiceError>;

    /// Deliver a contact-page message.
    async fn send_message(&self, message: &ContactMessage) -> Result<(), ServiceError>;
}

/// Always-success implementation: sleeps for the configured delay, then
/// resolves. Search returns the seeded offer table as-is, without filtering
/// by route.
pub struct MockReservationService {
    offers: Vec<FlightOffer>,
    booking_delay: Duration,
    login_delay: Duration,
    register_delay: Duration,
    contact_delay: Duration,
}

impl MockReservationService {
    pub fn new(offers: Vec<FlightOffer>) -> Self {
        Self {
            offers,
            booking_delay: BOOKING_SUBMIT_DELAY,
            login_delay: LOGIN_DELAY,
            register_delay: REGISTER_DELAY,
            contact_delay: CONTACT_SEND_DELAY,
        }
    }

    /// Same behavior with zero delays. Used by tests.
    pub fn instant(offers: Vec<FlightOffer>) -> Self {
        Self {
            offers,
            booking_delay: Duration::ZERO,
            login_delay: Duration::ZERO,
            register_delay: Duration::ZERO,
            contact_delay: Duration::ZERO,
        }
    }
}

#[async_trait]
impl ReservationService for MockReservationService {
    async fn search_flights(
        &self,
        criteria: &SearchCriteria,
    ) -> Result<Vec<FlightOffer>, ServiceError> {
        tracing::info!(
            origin = %criteria.origin,
            destination = %criteria.destination,
            passengers = criteria.passenger_count,
            "Searching flights"
        );
        Ok(self.offers.clone())
    }

    async fn submit_booking(
        &self,
        details: &PassengerDetails,
        offer_id: &str,
    ) -> Result<Confirmation, ServiceError> {
        tracing::info!(offer_id, passenger = %details.email, "Submitting booking");
        tokio::time::sleep(self.booking_delay).await;
        Ok(Confirmation {
            id: Uuid::new_v4(),
            offer_id: offer_id.to_string(),
            confirmed_at: Utc::now(),
        })
    }

    async fn authenticate(
        &self,
        credentials: &AccountCredentials,
    ) -> Result<Session, ServiceError> {
        tracing::info!(email = %credentials.email, "Authenticating");
        tokio::time::sleep(self.login_delay).await;
        Ok(Session {
            id: Uuid::new_v4(),
            email: credentials.email.clone(),
            started_at: Utc::now(),
        })
    }

    async fn register(&self, registration: &Registration) -> Result<Session, ServiceError> {
        tracing::info!(email = %registration.email, "Registering account");
        tokio::time::sleep(self.register_delay).await;
        Ok(Session {
            id: Uuid::new_v4(),
            email: registration.email.clone(),
            started_at: Utc::now(),
        })
    }

    async fn send_message(&self, message: &ContactMessage) -> Result<(), ServiceError> {
        tracing::info!(from = %message.email, subject = %message.subject, "Sending contact message");
        tokio::time::sleep(self.contact_delay).await;
        Ok(())
    }
}
