use regex::{Regex, RegexBuilder};

use super::{KeywordKind, Node};

/// Thomas International assessment vocabulary
pub const THOMAS_KEYWORDS: &[&str] = &[
    "PPA",
    "Personal Profile Analysis",
    "DISC",
    "GIA",
    "General Intelligence Assessment",
    "HPTI",
    "High Potential Trait Indicator",
    "TEIQue",
    "Thomas Connect",
    "Thomas Insights",
    "Chemistry Score",
    "Interpersonal Flexibility",
    "Dominance",
    "Influence",
    "Steadiness",
    "Compliance",
    "Conscientiousness",
    "Adjustment",
    "Curiosity",
    "Risk Approach",
    "Ambiguity Acceptance",
    "Competitiveness",
];

/// IFS platform vocabulary
pub const IFS_KEYWORDS: &[&str] = &[
    "IFS",
    "IFS Cloud",
    "Industrial AI",
    "ERP",
    "Enterprise Resource Planning",
    "EAM",
    "Enterprise Asset Management",
    "FSM",
    "Field Service Management",
];

/// Case-insensitive keyword highlighter over two vocabularies.
///
/// All terms go into one alternation, domain terms first. Matching is
/// leftmost-first: where terms overlap the earlier-listed one wins, not the
/// longest ("IFS" shadows "IFS Cloud"). A term present in both vocabularies
/// is styled as domain.
#[derive(Debug, Clone)]
pub struct Highlighter {
    domain: Vec<String>,
    platform: Vec<String>,
    pattern: Option<Regex>,
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new(&[], &[])
    }
}

impl Highlighter {
    /// Default vocabularies extended with per-message keyword lists
    pub fn new(extra_domain: &[String], extra_platform: &[String]) -> Self {
        let domain = THOMAS_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra_domain.iter().cloned());
        let platform = IFS_KEYWORDS
            .iter()
            .map(|k| k.to_string())
            .chain(extra_platform.iter().cloned());
        Self::with_vocabularies(domain, platform)
    }

    /// Highlighter over exactly the given vocabularies
    pub fn with_vocabularies<D, P>(domain: D, platform: P) -> Self
    where
        D: IntoIterator,
        D::Item: Into<String>,
        P: IntoIterator,
        P::Item: Into<String>,
    {
        let domain = dedupe(domain);
        let platform = dedupe(platform);
        let pattern = build_pattern(&domain, &platform);
        Self {
            domain,
            platform,
            pattern,
        }
    }

    pub fn domain_terms(&self) -> &[String] {
        &self.domain
    }

    pub fn platform_terms(&self) -> &[String] {
        &self.platform
    }

    /// Vocabulary a matched span belongs to; domain is checked first
    pub fn classify(&self, matched: &str) -> Option<KeywordKind> {
        let lower = matched.to_lowercase();
        if self.domain.iter().any(|k| k.to_lowercase() == lower) {
            Some(KeywordKind::Domain)
        } else if self.platform.iter().any(|k| k.to_lowercase() == lower) {
            Some(KeywordKind::Platform)
        } else {
            None
        }
    }

    /// Highlight the top-level plain text of a rendered node list.
    /// Bold spans and bullet items are markup blocks and stay as they are.
    pub fn highlight(&self, nodes: Vec<Node>) -> Vec<Node> {
        let mut out = Vec::with_capacity(nodes.len());
        for node in nodes {
            match node {
                Node::Text(text) => out.extend(self.highlight_text(&text)),
                other => out.push(other),
            }
        }
        out
    }

    /// Split one text run into plain and keyword nodes, keeping original casing
    pub fn highlight_text(&self, text: &str) -> Vec<Node> {
        let Some(pattern) = &self.pattern else {
            return if text.is_empty() { Vec::new() } else { vec![Node::text(text)] };
        };

        let mut nodes = Vec::new();
        let mut last = 0;
        for found in pattern.find_iter(text) {
            if found.start() > last {
                nodes.push(Node::text(&text[last..found.start()]));
            }
            let matched = found.as_str();
            match self.classify(matched) {
                Some(kind) => nodes.push(Node::keyword(matched, kind)),
                None => nodes.push(Node::text(matched)),
            }
            last = found.end();
        }
        if last < text.len() {
            nodes.push(Node::text(&text[last..]));
        }

        merge_text(nodes)
    }
}

/// Order-preserving dedupe that drops blank terms
fn dedupe<I>(terms: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut out: Vec<String> = Vec::new();
    for term in terms {
        let term = term.into();
        if !term.trim().is_empty() && !out.contains(&term) {
            out.push(term);
        }
    }
    out
}

fn build_pattern(domain: &[String], platform: &[String]) -> Option<Regex> {
    let alternation = domain
        .iter()
        .chain(platform.iter())
        .map(|k| regex::escape(k))
        .collect::<Vec<_>>()
        .join("|");

    if alternation.is_empty() {
        return None;
    }

    match RegexBuilder::new(&format!("(?:{})", alternation))
        .case_insensitive(true)
        .build()
    {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            log::warn!("Keyword highlighting disabled: {}", e);
            None
        }
    }
}

/// Join adjacent text nodes left by unclassifiable matches
fn merge_text(nodes: Vec<Node>) -> Vec<Node> {
    let mut out: Vec<Node> = Vec::with_capacity(nodes.len());
    for node in nodes {
        if let Node::Text(next) = &node {
            if let Some(Node::Text(prev)) = out.last_mut() {
                prev.push_str(next);
                continue;
            }
        }
        out.push(node);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::parse_markdown;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_domain_and_platform_spans() {
        let highlighter = Highlighter::with_vocabularies(["PPA"], ["ERP"]);
        assert_eq!(
            highlighter.highlight(parse_markdown("Discuss PPA and ERP together")),
            vec![
                Node::text("Discuss "),
                Node::keyword("PPA", KeywordKind::Domain),
                Node::text(" and "),
                Node::keyword("ERP", KeywordKind::Platform),
                Node::text(" together"),
            ]
        );
    }

    #[test]
    fn test_matching_is_case_insensitive_and_keeps_casing() {
        let highlighter = Highlighter::default();
        assert_eq!(
            highlighter.highlight_text("high dominance, low Gia"),
            vec![
                Node::text("high "),
                Node::keyword("dominance", KeywordKind::Domain),
                Node::text(", low "),
                Node::keyword("Gia", KeywordKind::Domain),
            ]
        );
    }

    #[test]
    fn test_first_listed_term_wins() {
        let highlighter = Highlighter::default();
        assert_eq!(
            highlighter.highlight_text("Running on IFS Cloud"),
            vec![
                Node::text("Running on "),
                Node::keyword("IFS", KeywordKind::Platform),
                Node::text(" Cloud"),
            ]
        );
    }

    #[test]
    fn test_term_in_both_vocabularies_is_domain() {
        let highlighter = Highlighter::with_vocabularies(["Cloud"], ["cloud", "ERP"]);
        assert_eq!(highlighter.classify("CLOUD"), Some(KeywordKind::Domain));
        assert_eq!(highlighter.classify("erp"), Some(KeywordKind::Platform));
        assert_eq!(highlighter.classify("other"), None);
    }

    #[test]
    fn test_extra_keywords_are_deduped_and_blanks_dropped() {
        let highlighter = Highlighter::new(
            &["PPA".to_string(), "".to_string(), "Talent Hub".to_string()],
            &["  ".to_string()],
        );
        assert_eq!(highlighter.domain_terms().len(), THOMAS_KEYWORDS.len() + 1);
        assert_eq!(highlighter.platform_terms().len(), IFS_KEYWORDS.len());
        assert_eq!(highlighter.highlight_text("plain"), vec![Node::text("plain")]);
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let highlighter = Highlighter::with_vocabularies(["C++ (core)"], Vec::<String>::new());
        assert_eq!(
            highlighter.highlight_text("knows C++ (core) well"),
            vec![
                Node::text("knows "),
                Node::keyword("C++ (core)", KeywordKind::Domain),
                Node::text(" well"),
            ]
        );
    }

    #[test]
    fn test_bullets_and_bold_untouched() {
        let highlighter = Highlighter::default();
        assert_eq!(
            highlighter.highlight(parse_markdown("**GIA** score for ERP\n* HPTI result")),
            vec![
                Node::strong("GIA"),
                Node::text(" score for "),
                Node::keyword("ERP", KeywordKind::Platform),
                Node::LineBreak,
                Node::Bullet(vec![Node::text("HPTI result")]),
            ]
        );
    }

    #[test]
    fn test_bullet_line_keeps_keywords_plain() {
        assert_eq!(
            crate::render::render_text("* PPA result"),
            vec![Node::Bullet(vec![Node::text("PPA result")])]
        );
    }

    #[test]
    fn test_empty_vocabularies() {
        let highlighter = Highlighter::with_vocabularies(Vec::<String>::new(), Vec::<String>::new());
        assert_eq!(highlighter.highlight_text("PPA"), vec![Node::text("PPA")]);
        assert!(highlighter.highlight_text("").is_empty());
    }
}
