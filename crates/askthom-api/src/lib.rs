//! # askthom-api
//!
//! Client side of the AskThom assistant service.
//!
//! ## Features
//!
//! - **Unified Interface**: Single `AskThomClient` trait, so the chat controller
//!   can be driven by the HTTP client, an offline stub or a test double
//! - **Typed Failures**: Every way a request can go wrong is an `ApiError`
//!   variant; callers decide how to degrade
//! - **Bounded Requests**: The HTTP client always carries a timeout
//!
//! ## Example
//!
//! ```rust,no_run
//! use askthom_api::{ClientConfig, ClientFactory};
//! use askthom_types::AskThomRequest;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = ClientFactory::create(&ClientConfig::default())?;
//!
//!     let request = AskThomRequest::new("Is this offer competitive?", "negotiation");
//!     let response = client.ask(&request).await?;
//!     println!("Thom: {}", response.answer_text().unwrap_or_default());
//!
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod config;
mod error;


// Re-export commonly used types
pub use client::{AskThomClient, HttpAskThomClient, OfflineClient};
pub use config::{
    ask_thom_endpoint, ClientConfig, ClientFactory, ASK_THOM_PATH, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT_SECS,
};
pub use error::ApiError;
