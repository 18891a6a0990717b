use std::time::Duration;

use serde_json::{json, Value};
use wiremock::matchers::*;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock assistant service for testing the HTTP client
pub struct AskThomMockServer {
    server: MockServer,
}

impl AskThomMockServer {
    pub async fn new() -> Self {
        let _ = env_logger::builder().is_test(true).try_init();
        Self {
            server: MockServer::start().await,
        }
    }

    pub fn uri(&self) -> String {
        self.server.uri()
    }

    /// Mock a successful answer for a specific request body
    pub async fn mock_answer_for(&self, expected_body: Value, answer: Value) {
        Mock::given(method("POST"))
            .and(path("/api/ai/ask-thom"))
            .and(header("content-type", "application/json"))
            .and(body_json(expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(answer))
            .expect(1)
            .mount(&self.server)
            .await;
    }

    /// Mock a successful answer for any request
    pub async fn mock_answer(&self, answer: &str) {
        Mock::given(method("POST"))
            .and(path("/api/ai/ask-thom"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "answer": answer,
                "highlighted_answer": answer,
                "thomas_keywords_found": ["PPA"],
                "ifs_keywords_found": [],
                "sources": ["Thomas PPA Assessment"]
            })))
            .mount(&self.server)
            .await;
    }

    /// Mock an HTTP error status
    pub async fn mock_status(&self, status: u16, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/ai/ask-thom"))
            .respond_with(ResponseTemplate::new(status).set_body_string(body))
            .mount(&self.server)
            .await;
    }

    /// Mock a 200 with an arbitrary raw body
    pub async fn mock_raw_body(&self, body: &str) {
        Mock::given(method("POST"))
            .and(path("/api/ai/ask-thom"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "application/json")
                    .set_body_string(body),
            )
            .mount(&self.server)
            .await;
    }

    /// Mock a slow answer
    pub async fn mock_delayed_answer(&self, delay: Duration) {
        Mock::given(method("POST"))
            .and(path("/api/ai/ask-thom"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "answer": "late" }))
                    .set_delay(delay),
            )
            .mount(&self.server)
            .await;
    }
}
