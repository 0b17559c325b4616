//! URL detection for description paragraphs

use std::sync::OnceLock;

use regex_lite::Regex;

/// Matches http(s) and ftp URLs, case-insensitively
fn url_pattern() -> &'static Regex {
    static URL_PATTERN: OnceLock<Regex> = OnceLock::new();
    URL_PATTERN.get_or_init(|| {
        Regex::new(r"(?i)\b(?:https?|ftp)://[-A-Z0-9+&@#/%?=~_|!:,.;]*[-A-Z0-9+&@#/%=~_|]").unwrap()
    })
}

/// Inline piece of a linkified paragraph
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    Text(String),
    Link { url: String },
}

impl InlineSpan {
    /// Text as it reads on the page
    pub fn as_str(&self) -> &str {
        match self {
            InlineSpan::Text(text) => text,
            InlineSpan::Link { url } => url,
        }
    }
}

/// Split text into spans, turning only the first URL into a link.
///
/// Later URLs stay plain text.
pub fn linkify(text: &str) -> Vec<InlineSpan> {
    let Some(found) = url_pattern().find(text) else {
        if text.is_empty() {
            return Vec::new();
        }
        return vec![InlineSpan::Text(text.to_string())];
    };

    let mut spans = Vec::with_capacity(3);
    let before = &text[..found.start()];
    let after = &text[found.end()..];

    if !before.is_empty() {
        spans.push(InlineSpan::Text(before.to_string()));
    }
    spans.push(InlineSpan::Link {
        url: found.as_str().to_string(),
    });
    if !after.is_empty() {
        spans.push(InlineSpan::Text(after.to_string()));
    }

    spans
}
