pub mod booking;
pub mod flow;

pub use booking::{BookingError, BookingForm, BookingState};
pub use flow::{FlowError, ReservationFlow};
