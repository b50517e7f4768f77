use async_trait::async_trait;

use crate::domain::payload::SearchPayload;
use crate::error::Result;

/// Fetch collaborator for the campground search site. Implementations own
/// whatever cookie/session state the site requires.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Perform the handshake calls the site needs before searches will
    /// return results. Called once per checker run.
    async fn establish_session(&self) -> Result<()>;

    /// Run one availability search and return the raw results document.
    async fn search(&self, payload: &SearchPayload) -> Result<String>;
}
