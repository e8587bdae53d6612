use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Profile fields shown (and editable) on the account page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: String,
}

/// A past or upcoming booking in the profile history.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRecord {
    pub reference: String,
    pub flight_number: String,
    pub route: String,
    pub date: Option<NaiveDate>,
    pub time: String,
    pub status: BookingRecordStatus,
    pub price_cdf: u32,
    pub passengers: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingRecordStatus {
    Confirmed,
    Pending,
    Completed,
}

impl BookingRecordStatus {
    /// Label shown on the booking card.
    pub fn label(&self) -> &'static str {
        match self {
            BookingRecordStatus::Confirmed => "Confirmé",
            BookingRecordStatus::Pending => "En attente",
            BookingRecordStatus::Completed => "Terminé",
        }
    }
}

/// The profile page: account fields with in-place editing (no server sync)
/// and the static booking history.
#[derive(Debug)]
pub struct ProfileView {
    profile: UserProfile,
    draft: Option<UserProfile>,
    bookings: Vec<BookingRecord>,
    signed_in: bool,
}

impl ProfileView {
    pub fn new(profile: UserProfile, bookings: Vec<BookingRecord>) -> Self {
        Self {
            profile,
            draft: None,
            bookings,
            signed_in: true,
        }
    }

    /// The demo account and its three bookings, as shipped in the product.
    pub fn demo() -> Self {
        let profile = UserProfile {
            first_name: "Jean".to_string(),
            last_name: "Mukendi".to_string(),
            email: "jean.mukendi@email.com".to_string(),
            phone: "+243 XXX XXX XXX".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1985, 3, 15),
            nationality: "Congolaise".to_string(),
        };
        let bookings = vec![
            BookingRecord {
                reference: "CAR-2024-001".to_string(),
                flight_number: "CA101".to_string(),
                route: "Kinshasa → Lubumbashi".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 15),
                time: "08:30".to_string(),
                status: BookingRecordStatus::Confirmed,
                price_cdf: 85000,
                passengers: 1,
            },
            BookingRecord {
                reference: "CAR-2024-002".to_string(),
                flight_number: "CA205".to_string(),
                route: "Lubumbashi → Kinshasa".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 6, 20),
                time: "14:20".to_string(),
                status: BookingRecordStatus::Pending,
                price_cdf: 92000,
                passengers: 1,
            },
            BookingRecord {
                reference: "CAR-2024-003".to_string(),
                flight_number: "CA309".to_string(),
                route: "Kinshasa → Goma".to_string(),
                date: NaiveDate::from_ymd_opt(2024, 5, 10),
                time: "19:45".to_string(),
                status: BookingRecordStatus::Completed,
                price_cdf: 95000,
                passengers: 2,
            },
        ];
        Self::new(profile, bookings)
    }

    pub fn profile(&self) -> &UserProfile {
        &self.profile
    }

    pub fn bookings(&self) -> &[BookingRecord] {
        &self.bookings
    }

    pub fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    pub fn is_signed_in(&self) -> bool {
        self.signed_in
    }

    /// Start editing. The draft is a copy of the current profile; the
    /// visible profile does not change until [`ProfileView::save`].
    pub fn begin_edit(&mut self) -> &mut UserProfile {
        self.draft.get_or_insert_with(|| self.profile.clone())
    }

    pub fn draft_mut(&mut self) -> Option<&mut UserProfile> {
        self.draft.as_mut()
    }

    /// Commit the draft in place. No server round trip happens here.
    pub fn save(&mut self) {
        if let Some(draft) = self.draft.take() {
            tracing::info!(email = %draft.email, "Profile updated");
            self.profile = draft;
        }
    }

    /// Throw the draft away, keeping the stored profile.
    pub fn cancel_edit(&mut self) {
        self.draft = None;
    }

    pub fn logout(&mut self) {
        tracing::info!(email = %self.profile.email, "Logged out");
        self.signed_in = false;
    }
}
