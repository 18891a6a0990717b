use std::sync::Arc;

use crate::client::{AskThomClient, HttpAskThomClient, OfflineClient};
use crate::config::ClientConfig;
use crate::ApiError;

/// Client factory for creating assistant clients
pub struct ClientFactory;

impl ClientFactory {
    /// Create the client described by `config`
    ///
    /// # Returns
    /// Arc-wrapped client implementing the AskThomClient trait; the offline
    /// client when `config.offline` is set, the HTTP client otherwise
    pub fn create(config: &ClientConfig) -> Result<Arc<dyn AskThomClient>, ApiError> {
        if config.offline {
            log::info!("AskThom running offline, answers come from local fallback rules");
            return Ok(Arc::new(OfflineClient));
        }

        let client = HttpAskThomClient::new(config)?;
        log::info!("AskThom endpoint: {}", client.endpoint());
        Ok(Arc::new(client))
    }
}
