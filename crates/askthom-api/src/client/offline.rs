use askthom_types::{AskThomRequest, AskThomResponse};
use async_trait::async_trait;

use crate::client::AskThomClient;
use crate::ApiError;

/// Client for running without a backend; every request is unavailable
#[derive(Debug, Default, Clone, Copy)]
pub struct OfflineClient;

#[async_trait]
impl AskThomClient for OfflineClient {
    async fn ask(&self, _request: &AskThomRequest) -> Result<AskThomResponse, ApiError> {
        Err(ApiError::Unavailable)
    }

    fn backend_name(&self) -> &str {
        "offline"
    }
}
