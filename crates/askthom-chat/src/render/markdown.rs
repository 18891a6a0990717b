use once_cell::sync::Lazy;
use regex::Regex;

use super::Node;

static BULLET_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[*-]\s*").expect("bullet marker pattern"));

static BOLD_SPAN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\*\*([^*]+)\*\*").expect("bold span pattern"));

/// Parse the markdown subset assistants use: `**bold**` and `*`/`-` bullet lines.
///
/// Plain lines are separated by [`Node::LineBreak`]; bullet lines become
/// standalone [`Node::Bullet`] blocks and carry no line break of their own.
pub fn parse_markdown(text: &str) -> Vec<Node> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = lines.len().saturating_sub(1);
    let mut nodes = Vec::new();

    for (idx, line) in lines.iter().enumerate() {
        if is_bullet(line) {
            let item = BULLET_MARKER.replace(line, "");
            nodes.push(Node::Bullet(parse_inline(&item)));
        } else {
            nodes.extend(parse_inline(line));
            if idx < last {
                nodes.push(Node::LineBreak);
            }
        }
    }

    nodes
}

fn is_bullet(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.starts_with("* ") || trimmed.starts_with("- ")
}

/// Split one line into text and bold spans, left to right, non-nested
fn parse_inline(line: &str) -> Vec<Node> {
    let mut parts = Vec::new();
    let mut last = 0;

    for caps in BOLD_SPAN.captures_iter(line) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if whole.start() > last {
            parts.push(Node::text(&line[last..whole.start()]));
        }
        parts.push(Node::strong(inner.as_str()));
        last = whole.end();
    }

    if last < line.len() {
        parts.push(Node::text(&line[last..]));
    }

    parts
}
