use askthom_types::{AskThomRequest, AskThomResponse};
use async_trait::async_trait;

use crate::ApiError;

pub mod http;
pub mod offline;

pub use http::HttpAskThomClient;
pub use offline::OfflineClient;

/// Assistant service client - one question in, one answer out
#[async_trait]
pub trait AskThomClient: Send + Sync {
    /// Ask a question. `Ok` always carries a non-blank answer.
    async fn ask(&self, request: &AskThomRequest) -> Result<AskThomResponse, ApiError>;

    /// Backend name for debugging
    fn backend_name(&self) -> &str;
}
