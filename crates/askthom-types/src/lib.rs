//! Core types for askthom
//!
//! This crate provides the message model, the opaque context payload and the
//! wire types shared by the API client, the chat controller and the host.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

// ============================================================================
// Identifiers
// ============================================================================

/// Identifies one widget instance; responses addressed to another id are stale.
pub type SessionId = uuid::Uuid;

/// Generate a fresh session id
pub fn new_session_id() -> SessionId {
    uuid::Uuid::new_v4()
}

// ============================================================================
// Message Types
// ============================================================================

/// Author of a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// One entry of a chat session.
///
/// Messages are immutable once built: fields are only readable through
/// accessors, and the timestamp is taken when the message is constructed,
/// which is the moment it is appended to a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    role: Role,
    content: String,
    timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    thomas_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    ifs_keywords: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    sources: Option<Vec<String>>,
}

impl Message {
    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
            thomas_keywords: Vec::new(),
            ifs_keywords: Vec::new(),
            sources: None,
        }
    }

    /// A question typed by the user, kept exactly as entered
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    /// An assistant message without server metadata (greetings, fallbacks)
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(Role::Assistant, content)
    }

    /// An assistant reply carrying the server's keyword lists and sources
    pub fn assistant_reply(
        content: impl Into<String>,
        thomas_keywords: Vec<String>,
        ifs_keywords: Vec<String>,
        sources: Option<Vec<String>>,
    ) -> Self {
        Self {
            thomas_keywords,
            ifs_keywords,
            sources,
            ..Self::new(Role::Assistant, content)
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    pub fn thomas_keywords(&self) -> &[String] {
        &self.thomas_keywords
    }

    pub fn ifs_keywords(&self) -> &[String] {
        &self.ifs_keywords
    }

    pub fn sources(&self) -> Option<&[String]> {
        self.sources.as_deref()
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }
}

// ============================================================================
// Context Payload
// ============================================================================

/// Opaque key/value payload describing what the user is looking at
pub type ContextMap = BTreeMap<String, ContextValue>;

/// A value inside a [`ContextMap`]. Never interpreted, only serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContextValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    List(Vec<ContextValue>),
    Map(ContextMap),
}

impl From<&str> for ContextValue {
    fn from(value: &str) -> Self {
        ContextValue::Text(value.to_string())
    }
}

impl From<String> for ContextValue {
    fn from(value: String) -> Self {
        ContextValue::Text(value)
    }
}

impl From<bool> for ContextValue {
    fn from(value: bool) -> Self {
        ContextValue::Bool(value)
    }
}

impl From<i64> for ContextValue {
    fn from(value: i64) -> Self {
        ContextValue::Integer(value)
    }
}

impl From<f64> for ContextValue {
    fn from(value: f64) -> Self {
        ContextValue::Float(value)
    }
}

impl From<ContextMap> for ContextValue {
    fn from(value: ContextMap) -> Self {
        ContextValue::Map(value)
    }
}

/// Fields that identify which record a page is showing
const VIEWING_FIELDS: [&str; 3] = [
    "currentlyViewingEmployee",
    "currentlyViewingCandidate",
    "currentlyViewingReferral",
];

/// Snapshot published by a host page for the assistant to ground its answers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageContextData {
    pub page_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_description: Option<String>,
    #[serde(flatten)]
    pub fields: ContextMap,
}

impl PageContextData {
    pub fn new(page_name: impl Into<String>) -> Self {
        Self {
            page_name: page_name.into(),
            page_description: None,
            fields: ContextMap::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.page_description = Some(description.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<ContextValue>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Identity of the page view: page name plus whichever record is open.
    /// Two snapshots with the same key describe the same view.
    pub fn change_key(&self) -> String {
        let mut key = self.page_name.clone();
        for field in VIEWING_FIELDS {
            key.push('|');
            key.push_str(&self.key_part(field));
        }
        key
    }

    /// The record currently open on the page, if any
    pub fn viewing(&self) -> Option<String> {
        VIEWING_FIELDS
            .iter()
            .map(|field| self.key_part(field))
            .find(|part| !part.is_empty())
    }

    fn key_part(&self, field: &str) -> String {
        match self.fields.get(field) {
            None | Some(ContextValue::Null) => String::new(),
            Some(ContextValue::Text(text)) => text.clone(),
            Some(other) => serde_json::to_string(other).unwrap_or_default(),
        }
    }

    /// Flatten into a context map with the camelCase page keys included
    pub fn to_context_map(&self) -> ContextMap {
        let mut map = self.fields.clone();
        map.insert("pageName".to_string(), ContextValue::Text(self.page_name.clone()));
        if let Some(description) = &self.page_description {
            map.insert(
                "pageDescription".to_string(),
                ContextValue::Text(description.clone()),
            );
        }
        map
    }
}

// ============================================================================
// Wire Types
// ============================================================================

/// Body of `POST /api/ai/ask-thom`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AskThomRequest {
    pub question: String,
    /// JSON-serialized context payload
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub context: Option<String>,
    pub page_context: String,
}

impl AskThomRequest {
    pub fn new(question: impl Into<String>, page_context: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
            page_context: page_context.into(),
        }
    }

    /// Attach the context payload, serialized verbatim. An empty map is omitted.
    pub fn with_context_data(mut self, data: &ContextMap) -> Self {
        if !data.is_empty() {
            self.context = serde_json::to_string(data).ok();
        }
        self
    }
}

/// A keyword list the service may send as `null`
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Successful reply from the assistant service
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AskThomResponse {
    #[serde(default)]
    pub answer: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub thomas_keywords_found: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ifs_keywords_found: Vec<String>,
    #[serde(default)]
    pub sources: Option<Vec<String>>,
}

impl AskThomResponse {
    /// The answer text, if the service actually produced one
    pub fn answer_text(&self) -> Option<&str> {
        self.answer.as_deref().filter(|answer| !answer.trim().is_empty())
    }

    /// Build the assistant message for this reply; `None` when there is no usable answer
    pub fn into_message(self) -> Option<Message> {
        let answer = self.answer_text()?.to_string();
        Some(Message::assistant_reply(
            answer,
            self.thomas_keywords_found,
            self.ifs_keywords_found,
            self.sources,
        ))
    }
}
