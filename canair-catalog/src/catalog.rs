use canair_core::search::FlightOffer;

/// Cities offered in the search selectors.
pub fn cities() -> &'static [&'static str] {
    &[
        "Kinshasa",
        "Brazzaville",
        "Lubumbashi",
        "Mbuji-Mayi",
        "Kisangani",
        "Kananga",
        "Likasi",
        "Kolwezi",
        "Tshikapa",
        "Beni",
        "Bukavu",
        "Goma",
    ]
}

/// The fixed offer table shown on the results page. Note that the table is
/// not keyed by route: whatever the search criteria, these three offers are
/// what the results page lists.
pub fn standard_offers() -> Vec<FlightOffer> {
    vec![
        FlightOffer {
            id: "CA101".to_string(),
            origin: "Kinshasa".to_string(),
            destination: "Lubumbashi".to_string(),
            departure_time: "08:30".to_string(),
            arrival_time: "11:45".to_string(),
            duration_label: "3h 15min".to_string(),
            price_cdf: 85000,
            aircraft: "Boeing 737".to_string(),
            available_seats: 23,
        },
        FlightOffer {
            id: "CA205".to_string(),
            origin: "Kinshasa".to_string(),
            destination: "Lubumbashi".to_string(),
            departure_time: "14:20".to_string(),
            arrival_time: "17:35".to_string(),
            duration_label: "3h 15min".to_string(),
            price_cdf: 92000,
            aircraft: "Airbus A320".to_string(),
            available_seats: 8,
        },
        FlightOffer {
            id: "CA309".to_string(),
            origin: "Kinshasa".to_string(),
            destination: "Lubumbashi".to_string(),
            departure_time: "19:45".to_string(),
            arrival_time: "23:00".to_string(),
            duration_label: "3h 15min".to_string(),
            price_cdf: 78000,
            aircraft: "Boeing 737".to_string(),
            available_seats: 45,
        },
    ]
}

/// Render a CDF amount the way the UI does, with thousands grouping:
/// `85000` becomes `"85 000 CDF"`.
pub fn format_price_cdf(amount: u32) -> String {
    let digits = amount.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped.push_str(" CDF");
    grouped
}
