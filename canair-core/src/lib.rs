pub mod validation;
pub mod search;
pub mod passenger;
pub mod identity;
pub mod service;

pub use validation::{ValidationError, ValidationResult, MIN_PASSWORD_LEN};
pub use service::{Confirmation, MockReservationService, ReservationService, ServiceError, Session};
