use canair_core::service::{ContactMessage, ReservationService};

use crate::credentials::FormError;

/// The contact page form. Same validate-then-send shape as the account
/// forms; the message is discarded once the simulated send resolves.
#[derive(Debug, Default)]
pub struct ContactForm {
    pub message: ContactMessage,
    in_flight: bool,
}

impl ContactForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight
    }

    pub async fn submit<S>(&mut self, service: &S) -> Result<(), FormError>
    where
        S: ReservationService + ?Sized,
    {
        if self.in_flight {
            return Err(FormError::SubmissionInFlight);
        }
        self.message.validate()?;

        self.in_flight = true;
        tracing::info!(from = %self.message.email, "Contact message submitted");
        let result = service.send_message(&self.message).await;
        self.in_flight = false;

        result?;
        self.message = ContactMessage::default();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canair_core::service::MockReservationService;
    use canair_core::validation::ValidationError;

    #[tokio::test]
    async fn test_all_fields_required() {
        let service = MockReservationService::instant(vec![]);
        let mut form = ContactForm::new();
        form.message.name = "Jean".to_string();
        form.message.email = "jean@email.com".to_string();
        let result = form.submit(&service).await;
        assert!(matches!(
            result,
            Err(FormError::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[tokio::test]
    async fn test_submit_clears_message_on_success() {
        let service = MockReservationService::instant(vec![]);
        let mut form = ContactForm::new();
        form.message.name = "Jean".to_string();
        form.message.email = "jean@email.com".to_string();
        form.message.subject = "Bagages".to_string();
        form.message.body = "Quelle est la franchise bagages ?".to_string();

        form.submit(&service).await.unwrap();
        assert!(form.message.name.is_empty());
        assert!(!form.is_submitting());
    }
}
