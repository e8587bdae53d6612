pub mod catalog;
pub mod selection;

pub use catalog::{cities, format_price_cdf, standard_offers};
pub use selection::{FlightList, SelectionError};
