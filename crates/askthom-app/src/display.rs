//! Terminal rendering of transcripts and widget state.

use chrono::Local;
use colored::{ColoredString, Colorize};

use askthom_chat::{render_message, ChatSession, KeywordKind, Node, Presentation};
use askthom_types::Message;

fn keyword(text: &str, kind: KeywordKind) -> ColoredString {
    match kind {
        KeywordKind::Domain => text.truecolor(255, 107, 53).bold(),
        KeywordKind::Platform => text.truecolor(128, 90, 213).bold(),
    }
}

/// Styled text for rendered nodes; same line structure as `plain_text`
pub fn format_nodes(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Strong(text) => out.push_str(&text.bold().to_string()),
            Node::Keyword { text, kind } => out.push_str(&keyword(text, *kind).to_string()),
            Node::LineBreak => out.push('\n'),
            Node::Bullet(children) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("  • ");
                out.push_str(&format_nodes(children));
                out.push('\n');
            }
        }
    }
    if matches!(nodes.last(), Some(Node::Bullet(_))) {
        out.pop();
    }
    out
}

/// Message body plus its source chips
pub fn format_body(message: &Message) -> String {
    let mut body = format_nodes(&render_message(message));

    if let Some(sources) = message.sources().filter(|s| !s.is_empty()) {
        let chips = sources
            .iter()
            .map(|source| format!("[{}]", source).bright_black().to_string())
            .collect::<Vec<_>>()
            .join(" ");
        body.push_str(&format!("\n{} {}", "Sources:".bright_black(), chips));
    }

    body
}

pub fn format_message(message: &Message) -> String {
    let time = message.timestamp().with_timezone(&Local).format("%H:%M").to_string();
    let speaker = if message.is_user() {
        "You".bright_green().bold()
    } else {
        "Thom".bright_cyan().bold()
    };
    format!("{} {}\n{}", speaker, time.bright_black(), format_body(message))
}

/// Index of the first message a text host shows for a given window size
pub fn visible_window(total: usize, limit: Option<usize>) -> usize {
    match limit {
        Some(limit) if total > limit => total - limit,
        _ => 0,
    }
}

/// Print the transcript the way the current layout would show it
pub fn print_transcript(session: &ChatSession) {
    let layout = session.presentation().layout();
    if !layout.messages_visible {
        println!("{}", "(minimized - /minimize to restore)".bright_black());
        return;
    }

    let messages = session.messages();
    let start = visible_window(messages.len(), layout.message_area.visible_messages());
    if start > 0 {
        println!(
            "{}",
            format!("... {} earlier messages (/expand to see more)", start).bright_black()
        );
    }
    for message in &messages[start..] {
        println!("{}\n", format_message(message));
    }
}

pub fn print_suggestions(session: &ChatSession) {
    let suggestions = session.suggested_questions();
    if suggestions.is_empty() {
        return;
    }
    println!("{}", "Suggested questions:".bright_black());
    for (i, question) in suggestions.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).bright_yellow(), question);
    }
    println!();
}

pub fn describe_presentation(presentation: &Presentation) -> String {
    let layout = presentation.layout();
    let mut status = format!("Mode: {}", presentation.expansion().as_str());
    if presentation.is_minimized() && presentation.can_minimize() {
        status.push_str(" (minimized)");
    }
    if layout.backdrop {
        status.push_str(" • /backdrop returns to normal");
    }
    format!("{} • next /expand: {}", status, presentation.cycle_hint())
}
