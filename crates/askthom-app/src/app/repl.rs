use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::Path;

use askthom_chat::ChatSession;

use crate::app::AppConfig;
use crate::config::load_page_context;
use crate::display::{describe_presentation, format_message, print_suggestions, print_transcript};

/// What a line of REPL input asks for
#[derive(Debug, PartialEq)]
pub enum ReplInput<'a> {
    Exit,
    Expand,
    Minimize,
    Backdrop,
    Suggest,
    History,
    Help,
    Page(&'a str),
    ClearPage,
    /// 1-based index into the suggested questions
    Pick(usize),
    Unknown(&'a str),
    Question(&'a str),
}

impl<'a> ReplInput<'a> {
    /// Classify a trimmed, non-empty line
    pub fn parse(line: &'a str, suggestions: usize) -> Self {
        match line {
            "exit" | "quit" => return ReplInput::Exit,
            "/expand" => return ReplInput::Expand,
            "/minimize" => return ReplInput::Minimize,
            "/backdrop" => return ReplInput::Backdrop,
            "/suggest" => return ReplInput::Suggest,
            "/history" => return ReplInput::History,
            "/help" => return ReplInput::Help,
            "/clear-page" => return ReplInput::ClearPage,
            _ => {}
        }

        if let Some(path) = line.strip_prefix("/page ") {
            return ReplInput::Page(path.trim());
        }
        if line.starts_with('/') {
            return ReplInput::Unknown(line);
        }
        if let Ok(n) = line.parse::<usize>() {
            if (1..=suggestions).contains(&n) {
                return ReplInput::Pick(n);
            }
        }
        ReplInput::Question(line)
    }
}

fn print_help() {
    println!("{} Commands:", "💡".bright_cyan());
    println!("  /expand           - Cycle normal → half → full screen");
    println!("  /minimize         - Toggle minimized (normal mode only)");
    println!("  /backdrop         - Leave half/full screen");
    println!("  /suggest          - Show suggested questions");
    println!("  /page <file>      - Publish a page context JSON file");
    println!("  /clear-page       - Clear the page context");
    println!("  /history          - Show the conversation");
    println!("  1-3               - Ask a suggested question");
    println!("  exit, quit        - Leave");
}

/// Run interactive REPL mode
pub async fn run_repl_mode(mut app_config: AppConfig) -> Result<()> {
    println!("{}", "💬 AskThom - Thomas International talent assistant".bright_cyan().bold());
    println!(
        "{}",
        format!(
            "Context: {} • backend: {}",
            app_config.context,
            app_config.client.backend_name()
        )
        .bright_black()
    );
    println!("{}", "Type 'exit' or 'quit' to exit, or '/help' for commands\n".bright_black());

    let mut session = app_config.new_session();
    print_transcript(&session);
    print_suggestions(&session);

    let mut rl = DefaultEditor::new()?;

    loop {
        let readline = rl.readline(&format!("{} ", "You:".bright_green().bold()));

        let line = match readline {
            Ok(line) => line,
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            Err(e) => {
                eprintln!("{} Input error: {}", "❌".bright_red(), e);
                break;
            }
        };

        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let _ = rl.add_history_entry(trimmed);

        let suggestions = session.suggested_questions();
        match ReplInput::parse(trimmed, suggestions.len()) {
            ReplInput::Exit => {
                println!("{}", "Goodbye!".bright_cyan());
                break;
            }
            ReplInput::Expand => {
                session.presentation_mut().cycle_expansion();
                println!("{}", describe_presentation(session.presentation()).bright_black());
                print_transcript(&session);
            }
            ReplInput::Minimize => {
                if session.presentation_mut().toggle_minimized() {
                    println!("{}", describe_presentation(session.presentation()).bright_black());
                    print_transcript(&session);
                } else {
                    println!(
                        "{} Minimize is only available in normal mode (use /backdrop first)",
                        "ℹ️".bright_blue()
                    );
                }
            }
            ReplInput::Backdrop => {
                session.presentation_mut().click_backdrop();
                println!("{}", describe_presentation(session.presentation()).bright_black());
            }
            ReplInput::Suggest => {
                if session.suggested_questions().is_empty() {
                    println!("{} Suggestions are only offered before the first question", "ℹ️".bright_blue());
                } else {
                    print_suggestions(&session);
                }
            }
            ReplInput::History => print_transcript(&session),
            ReplInput::Help => print_help(),
            ReplInput::Page(path) => match load_page_context(Path::new(path)) {
                Ok(data) => {
                    let name = data.page_name.clone();
                    app_config.page_registration = Some(app_config.page_context.register(data));
                    println!("{} Page context set: {}", "📄".bright_green(), name);
                }
                Err(e) => eprintln!("{} {:#}", "❌".bright_red(), e),
            },
            ReplInput::ClearPage => {
                app_config.page_registration = None;
                app_config.page_context.clear();
                println!("{} Page context cleared", "📄".bright_green());
            }
            ReplInput::Pick(n) => {
                let question = suggestions[n - 1];
                println!("{} {}", "You:".bright_green().bold(), question);
                session.set_input(question);
                ask_input(&mut session, &app_config).await;
            }
            ReplInput::Unknown(command) => {
                eprintln!("{} Unknown command: {} (try /help)", "❌".bright_red(), command);
            }
            ReplInput::Question(question) => {
                session.set_input(question);
                ask_input(&mut session, &app_config).await;
            }
        }
    }

    Ok(())
}

async fn ask_input(session: &mut ChatSession, app_config: &AppConfig) {
    println!("{}", "Thom is thinking...".bright_black());
    if session.send_input(app_config.client.as_ref()).await {
        if let Some(reply) = session.last_message() {
            println!("{}\n", format_message(reply));
        }
    }
}
