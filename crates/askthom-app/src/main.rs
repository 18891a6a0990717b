use anyhow::Result;
use clap::{CommandFactory, Parser};
use std::io;

use askthom::{run_ask, run_render, run_repl_mode, setup_from_cli, Cli, Commands};

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(shell) = cli.generate {
        let mut command = Cli::command();
        clap_complete::generate(shell, &mut command, "askthom", &mut io::stdout());
        return Ok(());
    }

    // Rendering needs no client
    if let Some(Commands::Render { file }) = &cli.command {
        return run_render(file.as_deref());
    }

    let app_config = setup_from_cli(&cli)?;

    match &cli.command {
        Some(Commands::Ask { question }) => run_ask(&app_config, &question.join(" ")).await,
        _ => run_repl_mode(app_config).await,
    }
}
