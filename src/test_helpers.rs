use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::payload::SearchPayload;
use crate::error::Result;
use crate::ports::search_client::SearchClient;

type SessionFn = Box<dyn Fn() -> Result<()> + Send + Sync>;
type SearchFn = Box<dyn Fn(&SearchPayload) -> Result<String> + Send + Sync>;

pub struct MockSearchClient {
    session_fn: Mutex<SessionFn>,
    search_fn: Mutex<SearchFn>,
    session_calls: AtomicUsize,
    search_calls: AtomicUsize,
}

impl Default for MockSearchClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSearchClient {
    pub fn new() -> Self {
        Self {
            session_fn: Mutex::new(Box::new(|| Ok(()))),
            search_fn: Mutex::new(Box::new(|_| Ok(results_page(&[])))),
            session_calls: AtomicUsize::new(0),
            search_calls: AtomicUsize::new(0),
        }
    }

    #[must_use]
    pub fn with_session(self, f: impl Fn() -> Result<()> + Send + Sync + 'static) -> Self {
        *self.session_fn.lock().unwrap() = Box::new(f);
        self
    }

    #[must_use]
    pub fn with_search(
        self,
        f: impl Fn(&SearchPayload) -> Result<String> + Send + Sync + 'static,
    ) -> Self {
        *self.search_fn.lock().unwrap() = Box::new(f);
        self
    }

    pub fn session_calls(&self) -> usize {
        self.session_calls.load(Ordering::SeqCst)
    }

    pub fn search_calls(&self) -> usize {
        self.search_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SearchClient for MockSearchClient {
    async fn establish_session(&self) -> Result<()> {
        self.session_calls.fetch_add(1, Ordering::SeqCst);
        let f = self.session_fn.lock().unwrap();
        f()
    }

    async fn search(&self, payload: &SearchPayload) -> Result<String> {
        self.search_calls.fetch_add(1, Ordering::SeqCst);
        let f = self.search_fn.lock().unwrap();
        f(payload)
    }
}

/// Results document with one availability panel per booking link.
pub fn results_page(hrefs: &[&str]) -> String {
    let panels: String = hrefs
        .iter()
        .map(|href| {
            format!(
                r#"<div class="check_avail_panel"><h3>Campsite</h3><a class="book_now" href="{href}">Book Now</a></div>"#
            )
        })
        .collect();
    format!("<html><body><div id=\"search_results\">{panels}</div></body></html>")
}
