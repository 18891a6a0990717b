use anyhow::{bail, Context, Result};
use colored::Colorize;
use std::fs;
use std::io;
use std::path::Path;

use askthom_chat::render_text;

use crate::app::AppConfig;
use crate::display::{format_body, format_nodes};

/// One question, one printed reply
pub async fn run_ask(app_config: &AppConfig, question: &str) -> Result<()> {
    let mut session = app_config.new_session();

    if !session.send(question, app_config.client.as_ref()).await {
        bail!("Nothing to ask: the question is empty");
    }

    match session.last_message() {
        Some(reply) => println!("{}", format_body(reply)),
        None => eprintln!("{} No reply", "⚠️".yellow()),
    }
    Ok(())
}

/// Render assistant markup from `file`, or stdin when none is given
pub fn run_render(file: Option<&Path>) -> Result<()> {
    let text = match file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => io::read_to_string(io::stdin()).context("Failed to read stdin")?,
    };

    println!("{}", format_nodes(&render_text(&text)));
    Ok(())
}
