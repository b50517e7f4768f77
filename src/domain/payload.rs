use crate::domain::dates::{DatePair, format_date};

/// Fixed filter fields sent with every availability search. Only the two
/// date fields vary between requests.
const BASE_SEARCH_FIELDS: [(&str, &str); 7] = [
    ("resetAllFilters", "false"),
    ("filtersFormSubmitted", "true"),
    ("sortBy", "RELEVANCE"),
    ("category", "camping"),
    ("availability", "all"),
    ("interest", "camping"),
    ("usingCampingForm", "false"),
];

/// Form body for one availability search request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPayload {
    pairs: Vec<(String, String)>,
}

impl SearchPayload {
    pub fn for_dates(dates: &DatePair) -> Self {
        let mut pairs: Vec<(String, String)> = BASE_SEARCH_FIELDS
            .iter()
            .map(|&(k, v)| (k.to_string(), v.to_string()))
            .collect();
        pairs.push(("arrivalDate".into(), format_date(dates.arrival)));
        pairs.push(("departureDate".into(), format_date(dates.departure)));
        Self { pairs }
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}
