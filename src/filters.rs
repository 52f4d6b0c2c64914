use crate::models::{PartySize, SearchRequest};

pub const PRICE_MIN: u32 = 0;
pub const PRICE_MAX: u32 = 2000;
pub const PRICE_STEP: u32 = 50;

/// Destinations offered as suggestions in the location field.
pub const LOCATIONS: &[&str] = &[
    "North Carolina",
    "South Carolina",
    "Florida",
    "Arizona",
    "California",
    "New York",
];

/// Current values of the search form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    max_price: u32,
    party_size: PartySize,
    location: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            max_price: PRICE_MAX,
            party_size: PartySize::Any,
            location: String::new(),
        }
    }
}

impl FilterState {
    pub fn max_price(&self) -> u32 {
        self.max_price
    }

    pub fn party_size(&self) -> PartySize {
        self.party_size
    }

    pub fn location(&self) -> &str {
        &self.location
    }

    pub fn set_max_price(&mut self, price: i64) {
        self.max_price = price.clamp(PRICE_MIN as i64, PRICE_MAX as i64) as u32;
    }

    pub fn set_party_size(&mut self, size: PartySize) {
        self.party_size = match size {
            PartySize::Any => PartySize::Any,
            PartySize::Count(n) => PartySize::count(n as i64),
        };
    }

    pub fn set_location(&mut self, location: impl Into<String>) {
        self.location = location.into();
    }

    /// Fill percentage of the price slider track, 0-100.
    pub fn price_fill_percent(&self) -> u32 {
        (self.max_price - PRICE_MIN) * 100 / (PRICE_MAX - PRICE_MIN)
    }

    /// Snapshot of the form as the request body. An empty location means
    /// "anywhere" to the backend.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest {
            max_price: self.max_price,
            party_size: self.party_size,
            location: self.location.trim().to_string(),
        }
    }
}
