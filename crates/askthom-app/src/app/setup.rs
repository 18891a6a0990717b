use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;

use askthom_api::{AskThomClient, ClientConfig, ClientFactory};
use askthom_chat::{ChatSession, PageContext, PageContextRegistration, KNOWN_CONTEXTS};
use askthom_types::ContextMap;

use crate::cli::Cli;
use crate::config::{load_context_data, load_page_context};

/// Application configuration derived from CLI arguments and environment
pub struct AppConfig {
    pub client: Arc<dyn AskThomClient>,
    pub context: String,
    pub context_data: Option<ContextMap>,
    pub page_context: PageContext,
    /// Page context published from `--page-context`, kept for the app's lifetime
    pub page_registration: Option<PageContextRegistration>,
    pub timeout: Duration,
}

impl AppConfig {
    /// Fresh session wired to this configuration
    pub fn new_session(&self) -> ChatSession {
        let mut session = ChatSession::new(self.context.clone())
            .with_page_context(self.page_context.clone())
            .with_request_timeout(self.timeout);
        if let Some(data) = &self.context_data {
            session = session.with_context_data(data.clone());
        }
        session
    }
}

/// Set up application configuration from CLI arguments
pub fn setup_from_cli(cli: &Cli) -> Result<AppConfig> {
    if cli.context != "default" && !KNOWN_CONTEXTS.contains(&cli.context.as_str()) {
        log::info!("Context '{}' has no dedicated greeting, using the default", cli.context);
    }

    let timeout = Duration::from_secs(cli.timeout_secs);
    let client_config = ClientConfig::new(cli.api_url.clone())
        .with_timeout(timeout)
        .offline(cli.offline);
    let client = ClientFactory::create(&client_config).context("Failed to create assistant client")?;

    let context_data = cli
        .context_data
        .as_deref()
        .map(load_context_data)
        .transpose()?;

    let page_context = PageContext::new();
    let page_registration = cli
        .page_context
        .as_deref()
        .map(load_page_context)
        .transpose()?
        .map(|data| page_context.register(data));

    Ok(AppConfig {
        client,
        context: cli.context.clone(),
        context_data,
        page_context,
        page_registration,
        timeout,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_offline_setup_with_page_context() {
        let mut page = NamedTempFile::new().unwrap();
        page.write_all(br#"{"pageName": "Negotiation", "currentlyViewingCandidate": "C-3"}"#)
            .unwrap();
        let path = page.path().to_string_lossy().to_string();

        let cli = Cli::try_parse_from([
            "askthom",
            "--offline",
            "--context",
            "negotiation",
            "--page-context",
            path.as_str(),
        ])
        .unwrap();
        let config = setup_from_cli(&cli).unwrap();

        assert_eq!(config.client.backend_name(), "offline");
        assert!(config.page_registration.is_some());

        let session = config.new_session();
        assert_eq!(session.context(), "negotiation");
        let payload = session.context_payload().unwrap();
        assert!(payload.contains_key("pageName"));
        assert!(payload.contains_key("currentlyViewingCandidate"));
    }

    #[test]
    fn test_missing_context_file_fails() {
        let cli = Cli::try_parse_from([
            "askthom",
            "--offline",
            "--context-data",
            "/nonexistent/context.json",
        ])
        .unwrap();
        assert!(setup_from_cli(&cli).is_err());
    }
}
