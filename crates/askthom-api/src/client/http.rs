use askthom_types::{AskThomRequest, AskThomResponse};
use async_trait::async_trait;

use crate::client::AskThomClient;
use crate::config::{ask_thom_endpoint, ClientConfig};
use crate::ApiError;

/// AskThom client talking JSON over HTTP
pub struct HttpAskThomClient {
    endpoint: String,
    client: reqwest::Client,
}

impl HttpAskThomClient {
    pub fn new(config: &ClientConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;

        Ok(Self {
            endpoint: ask_thom_endpoint(&config.base_url),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AskThomClient for HttpAskThomClient {
    async fn ask(&self, request: &AskThomRequest) -> Result<AskThomResponse, ApiError> {
        log::debug!(
            "POST {} (page_context={}, context={} bytes)",
            self.endpoint,
            request.page_context,
            request.context.as_ref().map(|c| c.len()).unwrap_or(0)
        );

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let response_text = response.text().await?;
        let answer: AskThomResponse = serde_json::from_str(&response_text)?;

        if answer.answer_text().is_none() {
            return Err(ApiError::Malformed("response has no answer".to_string()));
        }

        log::debug!(
            "Answer received: {} chars, {} Thomas / {} IFS keywords",
            answer.answer.as_ref().map(|a| a.len()).unwrap_or(0),
            answer.thomas_keywords_found.len(),
            answer.ifs_keywords_found.len()
        );

        Ok(answer)
    }

    fn backend_name(&self) -> &str {
        "http"
    }
}
