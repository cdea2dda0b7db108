//! Best-effort candidate field extraction from a free-text blob.
//!
//! Each rule runs independently; a rule that does not match leaves its field
//! unset. Nothing here validates or cross-checks values.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Label is case-insensitive, the captured words must be capitalized.
static NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i:name)[:\-]\s*([A-Z][a-z]+(?:\s[A-Z][a-z]+)*)").expect("valid name regex")
});

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\w.\-]+@[\w.\-]+\.\w+").expect("valid email regex"));

/// At least 9 characters: optional `+`, a digit, 7+ digits/spaces/hyphens, a digit.
static PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\+?\d[\d\s\-]{7,}\d").expect("valid phone regex"));

static YEARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+)\s+years?").expect("valid years regex"));

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateFields {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub years_experience: Option<u32>,
}

impl CandidateFields {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.years_experience.is_none()
    }
}

pub fn extract_candidate_fields(text: &str) -> CandidateFields {
    CandidateFields {
        full_name: NAME
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str().trim().to_string()),
        email: EMAIL.find(text).map(|m| m.as_str().to_string()),
        phone: PHONE.find(text).map(|m| m.as_str().to_string()),
        years_experience: YEARS
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse().ok()),
    }
}
