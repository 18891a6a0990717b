//! AskThom terminal host
//!
//! Embeds the chat widget in a terminal: a REPL standing in for the web page,
//! plus one-shot `ask` and `render` commands.

pub mod app;
pub mod cli;
pub mod config;
pub mod display;

pub use app::{run_ask, run_render, run_repl_mode, setup_from_cli, AppConfig};
pub use cli::{Cli, Commands};
