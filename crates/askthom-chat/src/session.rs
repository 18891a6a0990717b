//! Chat session controller.
//!
//! A [`ChatSession`] owns the transcript of one widget instance. Sending is
//! split into [`ChatSession::begin_send`] and [`ChatSession::complete`] so a
//! host can drive the network call itself; [`ChatSession::send`] does both
//! around an [`AskThomClient`].

use std::time::Duration;

use askthom_api::{AskThomClient, ApiError, DEFAULT_TIMEOUT_SECS};
use askthom_types::{
    new_session_id, AskThomRequest, AskThomResponse, ContextMap, Message, SessionId,
};

use crate::fallback::FallbackGenerator;
use crate::greeting;
use crate::page_context::PageContext;
use crate::presentation::Presentation;

/// A request that has been started but not yet completed
#[derive(Debug, Clone)]
pub struct PendingRequest {
    pub session: SessionId,
    pub seq: u64,
    /// Trimmed question text
    pub question: String,
    pub request: AskThomRequest,
    /// Context payload the request was built from
    pub context_data: Option<ContextMap>,
}

pub struct ChatSession {
    id: SessionId,
    context: String,
    context_data: Option<ContextMap>,
    page_context: Option<PageContext>,
    messages: Vec<Message>,
    input: String,
    loading: bool,
    next_seq: u64,
    in_flight: Option<u64>,
    presentation: Presentation,
    request_timeout: Duration,
    fallback: FallbackGenerator,
}

impl ChatSession {
    /// Start a session whose transcript holds only the greeting for `context`
    pub fn new(context: impl Into<String>) -> Self {
        let context = context.into();
        let messages = vec![Message::assistant(greeting::greeting(&context))];
        let id = new_session_id();
        log::debug!("Starting chat session {} (context: {})", id, context);

        Self {
            id,
            context,
            context_data: None,
            page_context: None,
            messages,
            input: String::new(),
            loading: false,
            next_seq: 0,
            in_flight: None,
            presentation: Presentation::new(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            fallback: FallbackGenerator::builtin(),
        }
    }

    pub fn with_context_data(mut self, data: ContextMap) -> Self {
        self.context_data = Some(data);
        self
    }

    pub fn with_page_context(mut self, page_context: PageContext) -> Self {
        self.page_context = Some(page_context);
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn with_fallback(mut self, fallback: FallbackGenerator) -> Self {
        self.fallback = fallback;
        self
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn context(&self) -> &str {
        &self.context
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn last_message(&self) -> Option<&Message> {
        self.messages.last()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input = text.into();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn presentation(&self) -> &Presentation {
        &self.presentation
    }

    pub fn presentation_mut(&mut self) -> &mut Presentation {
        &mut self.presentation
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// Starter questions, offered only until the first exchange
    pub fn suggested_questions(&self) -> &'static [&'static str] {
        if self.messages.len() > 1 {
            &[]
        } else {
            greeting::suggested_questions(&self.context)
        }
    }

    /// Page context snapshot overlaid with the session's own context data
    pub fn context_payload(&self) -> Option<ContextMap> {
        let snapshot = self
            .page_context
            .as_ref()
            .and_then(|page| page.snapshot())
            .map(|data| data.to_context_map());

        match (snapshot, &self.context_data) {
            (None, None) => None,
            (Some(map), None) => Some(map),
            (None, Some(data)) => Some(data.clone()),
            (Some(mut map), Some(data)) => {
                map.extend(data.iter().map(|(k, v)| (k.clone(), v.clone())));
                Some(map)
            }
        }
    }

    /// Record the user's question and prepare the outgoing request.
    ///
    /// Returns `None` without touching any state when the question is blank
    /// or another request is still in flight.
    pub fn begin_send(&mut self, question: &str) -> Option<PendingRequest> {
        let trimmed = question.trim();
        if trimmed.is_empty() || self.loading {
            return None;
        }

        self.messages.push(Message::user(question));
        self.input.clear();
        self.loading = true;

        self.next_seq += 1;
        self.in_flight = Some(self.next_seq);

        let context_data = self.context_payload();
        let mut request = AskThomRequest::new(trimmed, self.context.as_str());
        if let Some(data) = &context_data {
            request = request.with_context_data(data);
        }

        Some(PendingRequest {
            session: self.id,
            seq: self.next_seq,
            question: trimmed.to_string(),
            request,
            context_data,
        })
    }

    /// Send whatever is in the input buffer
    pub fn submit_input(&mut self) -> Option<PendingRequest> {
        let question = self.input.clone();
        self.begin_send(&question)
    }

    /// Apply the outcome of a pending request.
    ///
    /// Any failure is answered by the fallback generator. Returns false, and
    /// changes nothing, for a request that is not the one in flight.
    pub fn complete(
        &mut self,
        pending: PendingRequest,
        outcome: Result<AskThomResponse, ApiError>,
    ) -> bool {
        if pending.session != self.id || self.in_flight != Some(pending.seq) {
            log::debug!(
                "Dropping stale response for session {} (seq {})",
                pending.session,
                pending.seq
            );
            return false;
        }

        let reply = match outcome {
            Ok(response) => match response.into_message() {
                Some(message) => message,
                None => {
                    log::warn!("Reply had no answer; answering locally");
                    self.fallback_message(&pending)
                }
            },
            Err(err) => {
                log::warn!("Ask Thom request failed ({}): {}; answering locally", err.kind(), err);
                self.fallback_message(&pending)
            }
        };

        self.messages.push(reply);
        self.in_flight = None;
        self.loading = false;
        true
    }

    fn fallback_message(&self, pending: &PendingRequest) -> Message {
        Message::assistant(self.fallback.respond(
            &pending.question,
            &self.context,
            pending.context_data.as_ref(),
        ))
    }

    /// Ask `question` through `client` and append the reply.
    /// Returns whether an exchange happened.
    pub async fn send(&mut self, question: &str, client: &dyn AskThomClient) -> bool {
        let Some(pending) = self.begin_send(question) else {
            return false;
        };

        log::debug!(
            "Asking {} backend (session {}, seq {})",
            client.backend_name(),
            pending.session,
            pending.seq
        );

        let outcome = match tokio::time::timeout(self.request_timeout, client.ask(&pending.request)).await {
            Ok(result) => result,
            Err(_) => Err(ApiError::Timeout),
        };

        self.complete(pending, outcome)
    }

    pub async fn send_input(&mut self, client: &dyn AskThomClient) -> bool {
        let question = self.input.clone();
        self.send(&question, client).await
    }
}

impl std::fmt::Debug for ChatSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChatSession")
            .field("id", &self.id)
            .field("context", &self.context)
            .field("messages", &self.messages.len())
            .field("loading", &self.loading)
            .field("presentation", &self.presentation)
            .finish()
    }
}
