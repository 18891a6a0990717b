use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use askthom_api::{ApiError, AskThomClient};
use askthom_chat::{greeting, ChatSession, PageContext, KNOWN_CONTEXTS};
use askthom_types::{AskThomRequest, AskThomResponse, PageContextData, Role};
use async_trait::async_trait;
use pretty_assertions::assert_eq;

/// Replays scripted outcomes and records every request it sees
#[derive(Default)]
struct ScriptedClient {
    outcomes: Mutex<VecDeque<Result<AskThomResponse, ApiError>>>,
    requests: Mutex<Vec<AskThomRequest>>,
    delay: Option<Duration>,
}

impl ScriptedClient {
    fn answering(answers: &[&str]) -> Self {
        let outcomes = answers
            .iter()
            .map(|answer| {
                Ok(AskThomResponse {
                    answer: Some(answer.to_string()),
                    ..Default::default()
                })
            })
            .collect();
        Self {
            outcomes: Mutex::new(outcomes),
            ..Default::default()
        }
    }

    fn failing() -> Self {
        Self::default()
    }

    fn slow(delay: Duration) -> Self {
        Self {
            delay: Some(delay),
            ..Self::answering(&["too late"])
        }
    }

    fn calls(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    fn last_request(&self) -> AskThomRequest {
        self.requests.lock().unwrap().last().cloned().unwrap()
    }
}

#[async_trait]
impl AskThomClient for ScriptedClient {
    async fn ask(&self, request: &AskThomRequest) -> Result<AskThomResponse, ApiError> {
        self.requests.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(ApiError::Unavailable))
    }

    fn backend_name(&self) -> &str {
        "scripted"
    }
}

#[test]
fn test_greeting_for_every_known_context() {
    for context in KNOWN_CONTEXTS {
        let session = ChatSession::new(context);
        assert_eq!(session.messages().len(), 1);
        assert_eq!(session.messages()[0].content(), greeting(context));
        assert_ne!(greeting(context), greeting::DEFAULT_GREETING);
    }
    assert_eq!(
        ChatSession::new("something-else").messages()[0].content(),
        greeting::DEFAULT_GREETING
    );
}

#[tokio::test]
async fn test_blank_send_makes_no_request() {
    let client = ScriptedClient::answering(&["unused"]);
    let mut session = ChatSession::new("default");

    assert!(!session.send("", &client).await);
    assert!(!session.send("   ", &client).await);
    assert_eq!(session.messages().len(), 1);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_send_while_loading_makes_no_request() {
    let client = ScriptedClient::answering(&["unused"]);
    let mut session = ChatSession::new("default");

    let _pending = session.begin_send("first").unwrap();
    assert!(!session.send("second", &client).await);
    assert_eq!(session.messages().len(), 2);
    assert_eq!(client.calls(), 0);
}

#[tokio::test]
async fn test_successful_exchange_order() {
    let client = ScriptedClient::answering(&["Hello! Your **PPA** results look strong."]);
    let mut session = ChatSession::new("psychometric");

    assert!(session.send("hello", &client).await);

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1].role(), Role::User);
    assert_eq!(messages[1].content(), "hello");
    assert_eq!(messages[2].role(), Role::Assistant);
    assert_eq!(messages[2].content(), "Hello! Your **PPA** results look strong.");
    assert!(messages[1].timestamp() <= messages[2].timestamp());
    assert!(!session.is_loading());

    let request = client.last_request();
    assert_eq!(request.question, "hello");
    assert_eq!(request.page_context, "psychometric");
}

#[tokio::test]
async fn test_transport_failure_always_answers() {
    let questions = ["hello", "Is this offer competitive?", "thanks!", "?"];
    let contexts = KNOWN_CONTEXTS.iter().copied().chain(["default", "unknown-page"]);

    for context in contexts {
        for question in questions {
            let client = ScriptedClient::failing();
            let mut session = ChatSession::new(context);

            assert!(session.send(question, &client).await);
            assert_eq!(session.messages().len(), 3);

            let reply = session.last_message().unwrap();
            assert_eq!(reply.role(), Role::Assistant);
            assert!(!reply.content().trim().is_empty());
            assert!(!session.is_loading());
        }
    }
}

#[tokio::test]
async fn test_negotiation_fallback_themes() {
    let client = ScriptedClient::failing();
    let mut session = ChatSession::new("negotiation");

    session.send("Is this offer competitive?", &client).await;
    assert!(session.last_message().unwrap().content().contains("benchmarks"));

    session.send("Tell me about the weather", &client).await;
    assert!(session.last_message().unwrap().content().contains("negotiation"));
}

#[tokio::test(start_paused = true)]
async fn test_timeout_falls_back() {
    let client = ScriptedClient::slow(Duration::from_secs(120));
    let mut session = ChatSession::new("churn-risk").with_request_timeout(Duration::from_secs(5));

    assert!(session.send("Are there any warning signs?", &client).await);

    let reply = session.last_message().unwrap().content().to_string();
    assert_ne!(reply, "too late");
    assert!(reply.contains("risk indicators"));
    assert!(!session.is_loading());
}

#[tokio::test]
async fn test_page_context_travels_with_request() {
    let page = PageContext::new();
    let _registration = page.register(
        PageContextData::new("Referral Detail").with_field("currentlyViewingReferral", "R-9"),
    );

    let client = ScriptedClient::answering(&["Noted."]);
    let mut session = ChatSession::new("default").with_page_context(page.clone());
    session.send("Who referred them?", &client).await;

    let context = client.last_request().context.unwrap();
    let payload: serde_json::Value = serde_json::from_str(&context).unwrap();
    assert_eq!(payload["pageName"], "Referral Detail");
    assert_eq!(payload["currentlyViewingReferral"], "R-9");
}

#[tokio::test]
async fn test_late_completion_after_new_exchange_is_ignored() {
    let client = ScriptedClient::answering(&["second answer"]);
    let mut session = ChatSession::new("default");

    let first = session.begin_send("first").unwrap();
    session.complete(first.clone(), Err(ApiError::Timeout));
    session.send("second", &client).await;

    let before = session.messages().len();
    assert!(!session.complete(
        first,
        Ok(AskThomResponse {
            answer: Some("first answer, very late".to_string()),
            ..Default::default()
        })
    ));
    assert_eq!(session.messages().len(), before);
    assert_eq!(session.last_message().unwrap().content(), "second answer");
}

#[tokio::test]
async fn test_input_buffer_send() {
    let client = ScriptedClient::answering(&["Sure."]);
    let mut session = ChatSession::new("ideal-profile");
    assert_eq!(session.suggested_questions().len(), 3);

    session.set_input("How was the benchmark built?");
    assert!(session.send_input(&client).await);
    assert_eq!(session.input(), "");
    assert!(session.suggested_questions().is_empty());
}
