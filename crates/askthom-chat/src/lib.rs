//! # askthom-chat
//!
//! Everything the AskThom widget does between a keystroke and the screen.
//!
//! ## Features
//!
//! - **Session Controller**: Append-only transcript, single in-flight request,
//!   stale-response rejection and local fallback on any failure
//! - **Presentation**: Normal / half / full expansion plus minimize, mapped to
//!   layout parameters
//! - **Rendering**: Bold and bullet markup followed by keyword highlighting
//! - **Page Context**: Shared store that host pages publish their state into
//!
//! ## Example
//!
//! ```rust,no_run
//! use askthom_api::{ClientConfig, ClientFactory};
//! use askthom_chat::{render_message, ChatSession, plain_text};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(&ClientConfig::default())?;
//!     let mut session = ChatSession::new("negotiation");
//!
//!     session.send("Is this offer competitive?", client.as_ref()).await;
//!     if let Some(reply) = session.last_message() {
//!         println!("{}", plain_text(&render_message(reply)));
//!     }
//!
//!     Ok(())
//! }
//! ```

pub mod fallback;
pub mod greeting;
pub mod page_context;
pub mod presentation;
pub mod render;
pub mod session;

pub use fallback::{fallback_response, FallbackGenerator, FallbackQuery, FallbackRule, Trigger};
pub use greeting::{greeting, suggested_questions, KNOWN_CONTEXTS};
pub use page_context::{PageContext, PageContextRegistration};
pub use presentation::{ContainerSize, ExpansionMode, Layout, MessageArea, Presentation};
pub use render::{plain_text, render_message, render_text, Highlighter, KeywordKind, Node};
pub use session::{ChatSession, PendingRequest};
