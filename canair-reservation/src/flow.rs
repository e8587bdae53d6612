use std::time::Duration;

use canair_catalog::{FlightList, SelectionError};
use canair_core::search::{FlightOffer, SearchCriteria};
use canair_core::service::{Confirmation, ReservationService, ServiceError};
use canair_core::validation::ValidationError;

use crate::booking::{BookingError, BookingForm};

/// How long the UI waits on the confirmation screen before moving to the
/// profile page.
pub const POST_CONFIRMATION_DELAY: Duration = Duration::from_millis(2000);

#[derive(Debug, thiserror::Error)]
pub enum FlowError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("No search has been run yet")]
    NotSearched,

    #[error("No flight has been selected")]
    NoSelection,

    #[error(transparent)]
    Selection(#[from] SelectionError),

    #[error(transparent)]
    Booking(#[from] BookingError),

    #[error("Search failed: {0}")]
    Service(#[from] ServiceError),
}

/// The three-step reservation pipeline: search criteria → flight list and
/// selection → passenger form. This is the only state carried across pages;
/// everything else in the product is an independent single-page form.
///
/// Each step gates the next: search requires valid criteria, booking requires
/// a selection. Restarting discards the whole flow, selection included.
pub struct ReservationFlow {
    criteria: SearchCriteria,
    flights: Option<FlightList>,
    booking: Option<BookingForm>,
}

impl ReservationFlow {
    pub fn new() -> Self {
        Self {
            criteria: SearchCriteria::new(),
            flights: None,
            booking: None,
        }
    }

    pub fn criteria(&self) -> &SearchCriteria {
        &self.criteria
    }

    pub fn criteria_mut(&mut self) -> &mut SearchCriteria {
        &mut self.criteria
    }

    /// Validate the criteria and fetch offers, moving the flow to the
    /// results step. Re-running a search resets any previous selection.
    pub async fn search<S>(&mut self, service: &S) -> Result<&FlightList, FlowError>
    where
        S: ReservationService + ?Sized,
    {
        self.criteria.validate()?;
        tracing::info!(
            origin = %self.criteria.origin,
            destination = %self.criteria.destination,
            "Flight search started"
        );
        let offers = service.search_flights(&self.criteria).await?;
        let list = FlightList::from_offers(&self.criteria.origin, &self.criteria.destination, offers);
        self.booking = None;
        Ok(self.flights.insert(list))
    }

    pub fn flights(&self) -> Option<&FlightList> {
        self.flights.as_ref()
    }

    pub fn select(&mut self, offer_id: &str) -> Result<(), FlowError> {
        let list = self.flights.as_mut().ok_or(FlowError::NotSearched)?;
        list.select(offer_id)?;
        Ok(())
    }

    /// The selected offer, as shown in the sidebar summary.
    pub fn summary(&self) -> Option<&FlightOffer> {
        self.flights.as_ref().and_then(|l| l.summary())
    }

    /// Move to the passenger form for the selected offer. Idempotent: the
    /// form is created on first call and reused afterwards, so entered
    /// fields survive navigating back and forth.
    pub fn begin_booking(&mut self) -> Result<&mut BookingForm, FlowError> {
        let offer = self.summary().ok_or(FlowError::NoSelection)?;
        let offer_id = offer.id.clone();
        match &self.booking {
            Some(form) if form.offer_id() == offer_id => {}
            _ => self.booking = Some(BookingForm::new(offer_id)),
        }
        self.booking.as_mut().ok_or(FlowError::NoSelection)
    }

    pub fn booking(&self) -> Option<&BookingForm> {
        self.booking.as_ref()
    }

    /// Once the booking is confirmed, how long the confirmation screen is
    /// held before the UI moves to the profile page. None until then.
    pub fn redirect_delay(&self) -> Option<Duration> {
        match self.booking.as_ref().map(|b| b.state()) {
            Some(crate::booking::BookingState::Confirmed(_)) => Some(POST_CONFIRMATION_DELAY),
            _ => None,
        }
    }

    /// Submit the passenger form for the selected offer.
    pub async fn submit_booking<S>(&mut self, service: &S) -> Result<Confirmation, FlowError>
    where
        S: ReservationService + ?Sized,
    {
        let form = self.booking.as_mut().ok_or(FlowError::NoSelection)?;
        let confirmation = form.submit(service).await?;
        Ok(confirmation)
    }

    /// Discard the whole flow: criteria, results, selection, and any
    /// half-filled passenger form.
    pub fn restart(&mut self) {
        tracing::info!("Reservation flow restarted");
        *self = Self::new();
    }
}

impl Default for ReservationFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use canair_catalog::standard_offers;
    use canair_core::passenger::PassengerDetails;
    use canair_core::service::MockReservationService;
    use chrono::NaiveDate;

    fn service() -> MockReservationService {
        MockReservationService::instant(standard_offers())
    }

    fn fill_criteria(flow: &mut ReservationFlow) {
        let criteria = flow.criteria_mut();
        criteria.origin = "Kinshasa".to_string();
        criteria.destination = "Lubumbashi".to_string();
        criteria.date = NaiveDate::from_ymd_opt(2024, 5, 27);
        criteria.passenger_count = 1;
    }

    fn fill_passenger(details: &mut PassengerDetails) {
        details.first_name = "Jean".to_string();
        details.last_name = "Mukendi".to_string();
        details.email = "jean.mukendi@email.com".to_string();
        details.phone = "+243 811 234 567".to_string();
        details.date_of_birth = NaiveDate::from_ymd_opt(1985, 3, 15);
        details.terms_accepted = true;
    }

    #[tokio::test]
    async fn test_search_requires_valid_criteria() {
        let mut flow = ReservationFlow::new();
        let result = flow.search(&service()).await;
        assert!(matches!(result, Err(FlowError::Validation(_))));
        assert!(flow.flights().is_none());
    }

    #[tokio::test]
    async fn test_select_before_search_rejected() {
        let mut flow = ReservationFlow::new();
        assert!(matches!(flow.select("CA101"), Err(FlowError::NotSearched)));
    }

    #[tokio::test]
    async fn test_booking_requires_selection() {
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);
        flow.search(&service()).await.unwrap();
        assert!(matches!(flow.begin_booking(), Err(FlowError::NoSelection)));
    }

    #[tokio::test]
    async fn test_restart_clears_selection() {
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);
        flow.search(&service()).await.unwrap();
        flow.select("CA101").unwrap();
        flow.restart();
        assert!(flow.flights().is_none());
        assert!(flow.summary().is_none());
        assert_eq!(flow.criteria().origin, "");
    }

    #[tokio::test]
    async fn test_full_reservation_scenario() {
        // Search Kinshasa → Lubumbashi, 2024-05-27, one passenger.
        let service = service();
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);

        let list = flow.search(&service).await.unwrap();
        let ids: Vec<&str> = list.offers().iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["CA101", "CA205", "CA309"]);

        // Select CA205; the summary shows it.
        flow.select("CA205").unwrap();
        assert_eq!(flow.summary().unwrap().id, "CA205");
        assert_eq!(flow.summary().unwrap().price_cdf, 92000);

        // Fill the passenger form and submit.
        let form = flow.begin_booking().unwrap();
        fill_passenger(&mut form.details);
        let confirmation = flow.submit_booking(&service).await.unwrap();
        assert_eq!(confirmation.offer_id, "CA205");
        assert!(matches!(
            flow.booking().unwrap().state(),
            crate::booking::BookingState::Confirmed(_)
        ));
    }

    #[tokio::test]
    async fn test_redirect_delay_only_after_confirmation() {
        let service = service();
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);
        flow.search(&service).await.unwrap();
        flow.select("CA205").unwrap();

        let form = flow.begin_booking().unwrap();
        fill_passenger(&mut form.details);
        assert_eq!(flow.redirect_delay(), None);

        flow.submit_booking(&service).await.unwrap();
        assert_eq!(flow.redirect_delay(), Some(Duration::from_millis(2000)));
    }

    #[tokio::test]
    async fn test_reselect_keeps_single_choice() {
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);
        flow.search(&service()).await.unwrap();
        flow.select("CA101").unwrap();
        flow.select("CA309").unwrap();
        assert_eq!(flow.summary().unwrap().id, "CA309");
    }

    #[tokio::test]
    async fn test_begin_booking_preserves_entered_fields() {
        let mut flow = ReservationFlow::new();
        fill_criteria(&mut flow);
        flow.search(&service()).await.unwrap();
        flow.select("CA205").unwrap();

        flow.begin_booking().unwrap().details.first_name = "Jean".to_string();
        // Navigating back to the form keeps what was typed.
        assert_eq!(flow.begin_booking().unwrap().details.first_name, "Jean");
    }
}
