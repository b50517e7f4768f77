use std::collections::HashMap;

use scraper::{Html, Selector};
use tracing::debug;

use crate::domain::dates::DatePair;
use crate::domain::offer::Offer;
use crate::error::{CampsiteError, Result};

/// Extract bookable offers from a search-results document.
///
/// Each availability panel is inspected for a book-now link whose query
/// string names a park on the allow-list. Panels missing the link, the query
/// string, or the park id are unavailable or uninteresting, not malformed;
/// they are skipped without error.
pub fn extract_offers(
    html: &str,
    parks: &HashMap<String, String>,
    base_url: &str,
    dates: &DatePair,
) -> Result<Vec<Offer>> {
    let document = Html::parse_document(html);
    let panel_selector = selector("div.check_avail_panel")?;
    let link_selector = selector("a.book_now")?;

    let mut offers = Vec::new();
    for panel in document.select(&panel_selector) {
        let Some(link) = panel.select(&link_selector).next() else {
            continue;
        };
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        let Some((_, query)) = href.split_once('?') else {
            continue;
        };
        let Some(park_id) = query_param(query, "parkId") else {
            continue;
        };
        let Some(park_name) = parks.get(&park_id) else {
            debug!(%park_id, "Skipping park outside the allow-list");
            continue;
        };
        offers.push(Offer {
            park_id,
            park_name: park_name.clone(),
            booking_url: format!("{base_url}{href}"),
            arrival: dates.arrival,
            departure: dates.departure,
        });
    }
    Ok(offers)
}

fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| CampsiteError::MalformedDocument {
        reason: format!("selector '{css}' did not compile: {e}"),
    })
}

/// First value for `key` in a query string, absent rather than an error when
/// the key is missing.
fn query_param(query: &str, key: &str) -> Option<String> {
    url::form_urlencoded::parse(query.as_bytes())
        .find(|(k, _)| k.as_ref() == key)
        .map(|(_, v)| v.into_owned())
}
