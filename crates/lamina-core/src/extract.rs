//! Inline overlay tag extraction
//!
//! Splits free text into plain text and the `<lora:...>` / `<lyco:...>`
//! markers embedded in it. Stateless; the tag block feeds straight into
//! the selection parser.

use once_cell::sync::Lazy;
use regex::Regex;

static TAG_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<(?:lora|lyco):[^>]+>").expect("tag pattern is valid"));

/// Result of splitting overlay tags out of free text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction {
    /// Input text with every overlay tag removed
    pub filtered_text: String,
    /// Extracted tags, one per line, in order of appearance
    pub tags: String,
}

/// Pull every overlay tag out of `text`
pub fn extract_tags(text: &str) -> Extraction {
    let tags: Vec<&str> = TAG_PATTERN.find_iter(text).map(|m| m.as_str()).collect();
    let filtered_text = TAG_PATTERN.replace_all(text, "").into_owned();

    Extraction {
        filtered_text,
        tags: tags.join("\n"),
    }
}
