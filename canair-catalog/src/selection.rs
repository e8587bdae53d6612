use canair_core::search::FlightOffer;
use serde::{Deserialize, Serialize};

use crate::catalog::standard_offers;

/// The results page: a read-only offer list plus the user's current choice.
/// At most one offer is selected at a time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FlightList {
    origin: String,
    destination: String,
    offers: Vec<FlightOffer>,
    selected: Option<String>,
}

impl FlightList {
    /// Build a list for a route from the static catalog. The catalog is
    /// route-agnostic; the route is kept for the page header and summary.
    pub fn for_route(origin: &str, destination: &str) -> Self {
        Self::from_offers(origin, destination, standard_offers())
    }

    pub fn from_offers(origin: &str, destination: &str, offers: Vec<FlightOffer>) -> Self {
        Self {
            origin: origin.to_string(),
            destination: destination.to_string(),
            offers,
            selected: None,
        }
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn offers(&self) -> &[FlightOffer] {
        &self.offers
    }

    /// Mark an offer as selected, replacing any previous selection.
    /// Re-selecting the current offer is a no-op.
    pub fn select(&mut self, offer_id: &str) -> Result<(), SelectionError> {
        if !self.offers.iter().any(|o| o.id == offer_id) {
            return Err(SelectionError::NotFound(offer_id.to_string()));
        }
        self.selected = Some(offer_id.to_string());
        Ok(())
    }

    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// The selected offer, used to render the sidebar summary.
    pub fn summary(&self) -> Option<&FlightOffer> {
        let id = self.selected.as_deref()?;
        self.offers.iter().find(|o| o.id == id)
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SelectionError {
    #[error("Offer not found: {0}")]
    NotFound(String),
}
