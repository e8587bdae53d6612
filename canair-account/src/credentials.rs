use canair_core::identity::{AccountCredentials, Registration};
use canair_core::service::{ReservationService, ServiceError, Session};
use canair_core::validation::ValidationError;

/// Shared error type for the single-page account forms.
#[derive(Debug, thiserror::Error)]
pub enum FormError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Submission failed: {0}")]
    Service(#[from] ServiceError),
}

/// The login page. One submission at a time; the service is only called
/// once both fields are filled.
#[derive(Debug, Default)]
pub struct LoginForm {
    pub credentials: AccountCredentials,
    in_flight: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<Session, FormError>
    where
        S: ReservationService + ?Sized,
    {
        if self.in_flight {
            return Err(FormError::SubmissionInFlight);
        }
        self.credentials.validate()?;

        self.in_flight = true;
        tracing::info!(email = %self.credentials.email, "Login submitted");
        let result = service.authenticate(&self.credentials).await;
        self.in_flight = false;

        let session = result?;
        tracing::info!(session_id = %session.id, "Login succeeded");
        Ok(session)
    }
}

/// The registration page.
#[derive(Debug, Default)]
pub struct RegisterForm {
    pub registration: Registration,
    in_flight: bool,
}

impl RegisterForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<Session, FormError>
    where
        S: ReservationService + ?Sized,
    {
        if self.in_flight {
            return Err(FormError::SubmissionInFlight);
        }
        self.registration.validate()?;

        self.in_flight = true;
        tracing::info!(email = %self.registration.email, "Registration submitted");
        let result = service.register(&self.registration).await;
        self.in_flight = false;

        let session = result?;
        tracing::info!(session_id = %session.id, "Account created");
        Ok(session)
    }
}
