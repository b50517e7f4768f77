use std::collections::HashMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    /// Allow-list of park ids to report, mapped to display names. Sites
    /// outside this map never appear in output.
    #[serde(default = "default_parks")]
    pub parks: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            parks: default_parks(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
    #[serde(default = "default_retries")]
    pub max_retries: u32,
    /// Free-text location criteria for the session's location filter.
    #[serde(default = "default_location_criteria")]
    pub location_criteria: String,
    /// Pre-resolved Google location string the search form expects alongside
    /// the criteria.
    #[serde(default = "default_google_location")]
    pub google_location: String,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: default_user_agent(),
            request_timeout_secs: default_timeout(),
            max_retries: default_retries(),
            location_criteria: default_location_criteria(),
            google_location: default_google_location(),
        }
    }
}

fn default_base_url() -> String {
    "https://www.recreation.gov".into()
}

fn default_user_agent() -> String {
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36".into()
}

fn default_timeout() -> u64 {
    30
}

fn default_retries() -> u32 {
    2
}

fn default_location_criteria() -> String {
    "yosemite".into()
}

fn default_google_location() -> String {
    "Yosemite National Park, Yosemite Village, CA 95389, USA|-119.53832940000001|37.8651011||LOCALITY".into()
}

fn default_parks() -> HashMap<String, String> {
    // The Yosemite valley Pines campgrounds.
    HashMap::from([
        ("70925".to_string(), "UPPER PINES".to_string()),
        ("70928".to_string(), "LOWER PINES".to_string()),
        ("70927".to_string(), "NORTH PINES".to_string()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_default_values() {
        let config = Config::default();
        assert_eq!(config.search.base_url, "https://www.recreation.gov");
        assert_eq!(config.search.request_timeout_secs, 30);
        assert_eq!(config.search.max_retries, 2);
        assert_eq!(config.search.location_criteria, "yosemite");
    }

    #[test]
    fn default_parks_are_the_pines_campgrounds() {
        let config = Config::default();
        assert_eq!(config.parks.len(), 3);
        assert_eq!(config.parks.get("70925").map(String::as_str), Some("UPPER PINES"));
        assert_eq!(config.parks.get("70928").map(String::as_str), Some("LOWER PINES"));
        assert_eq!(config.parks.get("70927").map(String::as_str), Some("NORTH PINES"));
    }

    #[test]
    fn config_serde_roundtrip() {
        let original = Config::default();
        let yaml = serde_yml::to_string(&original).unwrap();
        let restored: Config = serde_yml::from_str(&yaml).unwrap();
        assert_eq!(restored.search.base_url, original.search.base_url);
        assert_eq!(restored.parks, original.parks);
    }

    #[test]
    fn config_deserialize_with_overrides() {
        let yaml = "search:\n  max_retries: 5";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.search.max_retries, 5);
        // Other fields get defaults
        assert_eq!(config.search.request_timeout_secs, 30);
        assert_eq!(config.parks.len(), 3);
    }

    #[test]
    fn parks_override_replaces_the_allow_list() {
        let yaml = "parks:\n  \"73635\": STANISLAUS";
        let config: Config = serde_yml::from_str(yaml).unwrap();
        assert_eq!(config.parks.len(), 1);
        assert_eq!(config.parks.get("73635").map(String::as_str), Some("STANISLAUS"));
    }
}
