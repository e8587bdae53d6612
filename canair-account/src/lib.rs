pub mod credentials;
pub mod profile;
pub mod contact;

pub use credentials::{FormError, LoginForm, RegisterForm};
pub use profile::{BookingRecord, BookingRecordStatus, ProfileView, UserProfile};
pub use contact::ContactForm;
