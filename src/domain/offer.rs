use chrono::NaiveDate;

use crate::domain::dates::format_date;

/// A bookable campsite discovered in a results document. The dates are the
/// ones the search was run with, not anything scraped from the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Offer {
    pub park_id: String,
    pub park_name: String,
    pub booking_url: String,
    pub arrival: NaiveDate,
    pub departure: NaiveDate,
}

impl std::fmt::Display for Offer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}, Booking Url: {}&arrivalDate={}&departureDate={}",
            self.park_name,
            self.booking_url,
            format_date(self.arrival),
            format_date(self.departure)
        )
    }
}
