use crate::config::types::SearchConfig;

pub const UNIF_SEARCH: &str = "/unifSearch.do";
pub const UNIF_RESULTS: &str = "/unifSearchResults.do";

/// Form that pins the session's search location before any availability
/// search will return results for it.
pub fn location_form(config: &SearchConfig) -> Vec<(String, String)> {
    vec![
        ("currentMaximumWindow".into(), "12".into()),
        ("locationCriteria".into(), config.location_criteria.clone()),
        ("interest".into(), String::new()),
        ("locationPosition".into(), String::new()),
        ("selectedLocationCriteria".into(), String::new()),
        ("resetAllFilters".into(), "false".into()),
        ("filtersFormSubmitted".into(), "false".into()),
        ("glocIndex".into(), "0".into()),
        ("googleLocations".into(), config.google_location.clone()),
    ]
}

/// Form that switches the session's search category to camping.
pub fn camping_form() -> Vec<(String, String)> {
    vec![
        ("resetAllFilters".into(), "false".into()),
        ("filtersFormSubmitted".into(), "true".into()),
        ("sortBy".into(), "RELEVANCE".into()),
        ("category".into(), "camping".into()),
        ("selectedState".into(), String::new()),
        ("selectedActivity".into(), String::new()),
        ("selectedAgency".into(), String::new()),
        ("interest".into(), "camping".into()),
        ("usingCampingForm".into(), "true".into()),
    ]
}
