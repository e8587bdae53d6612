use canair_core::passenger::PassengerDetails;
use canair_core::service::{Confirmation, ReservationService, ServiceError};
use canair_core::validation::ValidationError;
use serde::{Deserialize, Serialize};

/// Submission lifecycle of the booking form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingState {
    /// Fields are editable; nothing has been sent.
    Editing,
    /// A submission is in flight. Resubmission is rejected until it resolves.
    Submitting,
    /// The booking went through. Terminal for this form.
    Confirmed(Confirmation),
    /// The service reported a failure. Recoverable via [`BookingForm::resume_editing`].
    Failed(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BookingError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("A submission is already in progress")]
    SubmissionInFlight,

    #[error("Booking is already confirmed")]
    AlreadyConfirmed,

    #[error("Submission failed: {0}")]
    Service(#[from] ServiceError),
}

/// The booking page: passenger fields plus the submission state machine
/// Editing → Submitting → Confirmed | Failed.
///
/// The service is only invoked once validation has passed; a validation
/// failure leaves the form in Editing with nothing sent.
#[derive(Debug)]
pub struct BookingForm {
    offer_id: String,
    pub details: PassengerDetails,
    state: BookingState,
}

impl BookingForm {
    pub fn new(offer_id: impl Into<String>) -> Self {
        Self {
            offer_id: offer_id.into(),
            details: PassengerDetails::new(),
            state: BookingState::Editing,
        }
    }

    pub fn offer_id(&self) -> &str {
        &self.offer_id
    }

    pub fn state(&self) -> &BookingState {
        &self.state
    }

    /// Validate and submit. On success the form transitions to Confirmed;
    /// on a service failure it transitions to Failed with the user-visible
    /// message. Validation errors leave the state untouched.
    pub async fn submit<S>(&mut self, service: &S) -> Result<Confirmation, BookingError>
    where
        S: ReservationService + ?Sized,
    {
        match self.state {
            BookingState::Submitting => return Err(BookingError::SubmissionInFlight),
            BookingState::Confirmed(_) => return Err(BookingError::AlreadyConfirmed),
            BookingState::Editing | BookingState::Failed(_) => {}
        }

        self.details.validate()?;

        self.state = BookingState::Submitting;
        tracing::info!(offer_id = %self.offer_id, "Booking submission started");

        match service.submit_booking(&self.details, &self.offer_id).await {
            Ok(confirmation) => {
                tracing::info!(booking_id = %confirmation.id, "Booking confirmed");
                self.state = BookingState::Confirmed(confirmation.clone());
                Ok(confirmation)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Booking submission failed");
                self.state = BookingState::Failed(e.to_string());
                Err(BookingError::Service(e))
            }
        }
    }

    /// Return a failed form to the editable state so it can be resubmitted.
    pub fn resume_editing(&mut self) {
        if let BookingState::Failed(_) = self.state {
            self.state = BookingState::Editing;
        }
    }
}
