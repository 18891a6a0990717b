//! Assistant message rendering.
//!
//! Two passes, in order: line-oriented markdown ([`parse_markdown`]) and then
//! keyword highlighting of the plain text it leaves behind ([`Highlighter`]).
//! Neither pass can fail; markup that does not parse stays literal text.

mod highlight;
mod markdown;

pub use highlight::{Highlighter, IFS_KEYWORDS, THOMAS_KEYWORDS};
pub use markdown::parse_markdown;

use askthom_types::Message;

/// Which vocabulary a highlighted term came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordKind {
    /// Thomas assessment terms (PPA, GIA, HPTI, trait names...)
    Domain,
    /// IFS platform terms (ERP, EAM, FSM...)
    Platform,
}

/// Display node produced by rendering
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Text(String),
    Strong(String),
    Keyword { text: String, kind: KeywordKind },
    LineBreak,
    /// Block-level list item
    Bullet(Vec<Node>),
}

impl Node {
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn strong(text: impl Into<String>) -> Self {
        Node::Strong(text.into())
    }

    pub fn keyword(text: impl Into<String>, kind: KeywordKind) -> Self {
        Node::Keyword {
            text: text.into(),
            kind,
        }
    }
}

/// Render one message for display.
///
/// User messages are shown verbatim; assistant messages go through markdown
/// and highlighting, with the message's own keyword lists added to the
/// default vocabularies.
pub fn render_message(message: &Message) -> Vec<Node> {
    if message.is_user() {
        return vec![Node::text(message.content())];
    }

    let highlighter = Highlighter::new(message.thomas_keywords(), message.ifs_keywords());
    highlighter.highlight(parse_markdown(message.content()))
}

/// Render assistant markup with the default vocabularies
pub fn render_text(text: &str) -> Vec<Node> {
    Highlighter::default().highlight(parse_markdown(text))
}

/// Flatten nodes back to text. Bullets come out as `• item` lines.
pub fn plain_text(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Node::Text(text) | Node::Strong(text) | Node::Keyword { text, .. } => {
                out.push_str(text)
            }
            Node::LineBreak => out.push('\n'),
            Node::Bullet(children) => {
                if !out.is_empty() && !out.ends_with('\n') {
                    out.push('\n');
                }
                out.push_str("• ");
                out.push_str(&plain_text(children));
                out.push('\n');
            }
        }
    }
    if matches!(nodes.last(), Some(Node::Bullet(_))) {
        out.pop();
    }
    out
}
