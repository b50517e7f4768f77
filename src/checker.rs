use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, info};

use crate::adapters::recgov::availability;
use crate::config::types::Config;
use crate::domain::dates::DateSpec;
use crate::domain::offer::Offer;
use crate::domain::payload::SearchPayload;
use crate::error::Result;
use crate::ports::search_client::SearchClient;

/// Drives one availability check: expands the date spec, runs a search per
/// date pair through the fetch collaborator, and collects every offer.
pub struct CampsiteChecker {
    client: Arc<dyn SearchClient>,
    parks: HashMap<String, String>,
    base_url: String,
}

impl CampsiteChecker {
    pub fn new(client: Arc<dyn SearchClient>, config: &Config) -> Self {
        Self {
            client,
            parks: config.parks.clone(),
            base_url: config.search.base_url.clone(),
        }
    }

    /// Returns offers for all date pairs, in date order then document order.
    /// The first failed fetch aborts the remaining pairs.
    pub async fn find_campsites(&self, spec: &DateSpec) -> Result<Vec<Offer>> {
        let pairs = spec.date_pairs()?;
        info!(date_pairs = pairs.len(), "Checking campsite availability");

        self.client.establish_session().await?;

        // Offers from every date pair accumulate into one report.
        let mut offers = Vec::new();
        for dates in &pairs {
            let payload = SearchPayload::for_dates(dates);
            let html = self.client.search(&payload).await?;
            let found = availability::extract_offers(&html, &self.parks, &self.base_url, dates)?;
            debug!(arrival = %dates.arrival, matches = found.len(), "Search complete");
            offers.extend(found);
        }
        Ok(offers)
    }
}
