use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use crate::adapters::recgov::forms::{UNIF_RESULTS, UNIF_SEARCH, camping_form, location_form};
use crate::config::types::SearchConfig;
use crate::domain::payload::SearchPayload;
use crate::error::{CampsiteError, Result};
use crate::ports::search_client::SearchClient;

/// Session-based client for recreation.gov's unified search. The site keys
/// search scope (location, category) off the session cookie, so those are
/// posted once up front and the per-date searches only vary the dates.
pub struct RecGovClient {
    http: Client,
    config: SearchConfig,
}

impl RecGovClient {
    pub fn new(config: SearchConfig) -> std::result::Result<Self, reqwest::Error> {
        let http = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .cookie_store(true)
            .build()?;

        Ok(Self { http, config })
    }

    /// POST a form, retrying transient transport failures. A response with a
    /// non-success status is returned as `FetchFailed` immediately.
    async fn post_form(&self, path: &str, form: &[(String, String)]) -> Result<String> {
        let url = format!("{}{path}", self.config.base_url);
        let mut attempt = 0;
        loop {
            if attempt > 0 {
                let delay = Duration::from_secs(u64::from(attempt) * 2);
                debug!(attempt, delay_secs = delay.as_secs(), "Retrying request");
                tokio::time::sleep(delay).await;
            }

            match self.http.post(&url).form(form).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return response.text().await.map_err(CampsiteError::Http);
                    }
                    return Err(CampsiteError::FetchFailed {
                        status: status.as_u16(),
                        url,
                    });
                }
                Err(e) => {
                    warn!(error = %e, attempt, "HTTP request failed");
                    if attempt >= self.config.max_retries {
                        return Err(CampsiteError::Http(e));
                    }
                    attempt += 1;
                }
            }
        }
    }
}

#[async_trait]
impl SearchClient for RecGovClient {
    async fn establish_session(&self) -> Result<()> {
        debug!("Priming recreation.gov session");

        // GET sets the session cookie
        let url = format!("{}{UNIF_RESULTS}", self.config.base_url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(CampsiteError::FetchFailed {
                status: status.as_u16(),
                url,
            });
        }

        // Pin the location, then the camping category
        self.post_form(UNIF_SEARCH, &location_form(&self.config))
            .await?;
        self.post_form(UNIF_SEARCH, &camping_form()).await?;
        Ok(())
    }

    async fn search(&self, payload: &SearchPayload) -> Result<String> {
        debug!("Running availability search");
        self.post_form(UNIF_SEARCH, payload.pairs()).await
    }
}
