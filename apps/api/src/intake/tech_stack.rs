//! Tech-stack declaration detection and normalization.
//!
//! Pattern-based on purpose: callers only see `text -> Option<Vec<String>>`,
//! so a stricter parser can replace this without touching the orchestrator.

use std::sync::LazyLock;

use regex::Regex;

static DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)tech stack[:\-]\s*(.+)").expect("valid tech stack regex"));

static DELIMITERS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,/;|]+").expect("valid delimiter regex"));

/// Splits a delimited technology list on runs of `,` `/` `;` `|`.
/// Pieces are trimmed and empties dropped; order, casing and duplicates are kept.
pub fn normalize_tech_stack(raw: &str) -> Vec<String> {
    DELIMITERS
        .split(raw)
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Finds a "tech stack: ..." declaration and returns its normalized list.
/// The declaration runs to the end of its line.
pub fn detect_tech_stack(text: &str) -> Option<Vec<String>> {
    DECLARATION
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| normalize_tech_stack(m.as_str()))
}
