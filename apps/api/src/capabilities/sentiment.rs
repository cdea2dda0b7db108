use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::capabilities::prompts::SENTIMENT_PROMPT;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, STRUCTURED_TEMPERATURE};
use crate::llm_client::{parse_json_reply, ChatModel};
use crate::models::conversation::Message;

/// Only this many leading characters are sent for scoring.
pub const MAX_SCORED_CHARS: usize = 512;

const POSITIVE_WORDS: &[&str] = &[
    "good",
    "great",
    "excellent",
    "happy",
    "confident",
    "interested",
];
const NEGATIVE_WORDS: &[&str] = &["bad", "issue", "problem", "confused", "concerned"];

/// Coarse sentiment label. `confidence` is `None` for heuristic readings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub label: String,
    pub confidence: Option<f32>,
}

impl fmt::Display for SentimentReading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.confidence {
            Some(c) => write!(f, "{} ({c:.2})", self.label),
            None => write!(f, "{} (heuristic)", self.label),
        }
    }
}

#[async_trait]
pub trait SentimentScorer: Send + Sync {
    /// Returns `None` for empty text. Never fails.
    async fn score(&self, text: &str) -> Option<SentimentReading>;
}

/// Keyword-count scorer. Deterministic, no I/O.
pub struct HeuristicSentimentScorer;

#[async_trait]
impl SentimentScorer for HeuristicSentimentScorer {
    async fn score(&self, text: &str) -> Option<SentimentReading> {
        heuristic_sentiment(text)
    }
}

/// Counts positive vs negative keyword hits (substring, case-insensitive).
pub fn heuristic_sentiment(text: &str) -> Option<SentimentReading> {
    if text.is_empty() {
        return None;
    }
    let lowered = text.to_lowercase();
    let pos = POSITIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();
    let neg = NEGATIVE_WORDS.iter().filter(|w| lowered.contains(*w)).count();

    let label = match pos.cmp(&neg) {
        std::cmp::Ordering::Greater => "POSITIVE",
        std::cmp::Ordering::Less => "NEGATIVE",
        std::cmp::Ordering::Equal => "NEUTRAL",
    };
    Some(SentimentReading {
        label: label.to_string(),
        confidence: None,
    })
}

#[derive(Debug, Deserialize)]
struct ModelSentiment {
    label: String,
    confidence: f32,
}

/// Scores through the chat model, falling back to the heuristic on any failure.
pub struct LlmSentimentScorer {
    model: Arc<dyn ChatModel>,
}

impl LlmSentimentScorer {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl SentimentScorer for LlmSentimentScorer {
    async fn score(&self, text: &str) -> Option<SentimentReading> {
        if text.is_empty() {
            return None;
        }

        let excerpt = truncate_chars(text, MAX_SCORED_CHARS);
        let messages = [
            Message::system(JSON_ONLY_SYSTEM),
            Message::user(SENTIMENT_PROMPT.replace("{text}", excerpt)),
        ];
        let result = self
            .model
            .complete(&messages, STRUCTURED_TEMPERATURE)
            .await
            .and_then(|reply| parse_json_reply::<ModelSentiment>(&reply));

        match result {
            Ok(s) if !s.label.trim().is_empty() => Some(SentimentReading {
                label: s.label.trim().to_uppercase(),
                confidence: Some(s.confidence.clamp(0.0, 1.0)),
            }),
            Ok(_) => heuristic_sentiment(text),
            Err(e) => {
                warn!("Sentiment scoring failed, using heuristic: {e}");
                heuristic_sentiment(text)
            }
        }
    }
}

/// Returns at most `max` leading characters of `text`, respecting char boundaries.
fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
