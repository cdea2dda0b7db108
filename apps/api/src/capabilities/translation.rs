use std::sync::Arc;

use async_trait::async_trait;
use serde::Deserialize;
use tracing::{debug, warn};

use crate::capabilities::prompts::{
    DETECT_AND_TRANSLATE_PROMPT, TRANSLATE_FROM_ENGLISH_PROMPT, TRANSLATE_FROM_ENGLISH_SYSTEM,
};
use crate::capabilities::WORKING_LANGUAGE;
use crate::llm_client::prompts::{JSON_ONLY_SYSTEM, STRUCTURED_TEMPERATURE};
use crate::llm_client::{parse_json_reply, ChatModel};
use crate::models::conversation::Message;

/// Input text rendered in the working language.
#[derive(Debug, Clone, PartialEq)]
pub struct Translation {
    pub text: String,
    /// Detected source language; `None` when already in the working language
    /// or when detection was unavailable.
    pub source_language: Option<String>,
}

impl Translation {
    pub fn passthrough(text: &str) -> Self {
        Self {
            text: text.to_string(),
            source_language: None,
        }
    }
}

#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates `text` into the working language. `source` skips detection when given.
    async fn to_working_language(&self, text: &str, source: Option<&str>) -> Translation;

    /// Translates working-language `text` into `target`. Returns `text` unchanged on failure.
    async fn from_working_language(&self, text: &str, target: &str) -> String;
}

/// Stand-in used when translation is disabled: everything passes through.
pub struct NoopTranslator;

#[async_trait]
impl Translator for NoopTranslator {
    async fn to_working_language(&self, text: &str, _source: Option<&str>) -> Translation {
        Translation::passthrough(text)
    }

    async fn from_working_language(&self, text: &str, _target: &str) -> String {
        text.to_string()
    }
}

#[derive(Debug, Deserialize)]
struct DetectedTranslation {
    language: String,
    english: String,
}

/// Detects and translates through the chat model.
pub struct LlmTranslator {
    model: Arc<dyn ChatModel>,
}

impl LlmTranslator {
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }
}

#[async_trait]
impl Translator for LlmTranslator {
    async fn to_working_language(&self, text: &str, source: Option<&str>) -> Translation {
        if text.trim().is_empty() || source.is_some_and(is_working_language) {
            return Translation::passthrough(text);
        }

        let messages = [
            Message::system(JSON_ONLY_SYSTEM),
            Message::user(DETECT_AND_TRANSLATE_PROMPT.replace("{text}", text)),
        ];
        let detected = match self
            .model
            .complete(&messages, STRUCTURED_TEMPERATURE)
            .await
            .and_then(|reply| parse_json_reply::<DetectedTranslation>(&reply))
        {
            Ok(d) => d,
            Err(e) => {
                warn!("Language detection failed, using input as-is: {e}");
                return Translation::passthrough(text);
            }
        };

        let language = source
            .map(normalize_language)
            .unwrap_or_else(|| normalize_language(&detected.language));
        if language.is_empty() || is_working_language(&language) || detected.english.trim().is_empty()
        {
            return Translation::passthrough(text);
        }

        debug!("Translated input from '{language}'");
        Translation {
            text: detected.english,
            source_language: Some(language),
        }
    }

    async fn from_working_language(&self, text: &str, target: &str) -> String {
        if text.trim().is_empty() || target.trim().is_empty() || is_working_language(target) {
            return text.to_string();
        }

        let messages = [
            Message::system(TRANSLATE_FROM_ENGLISH_SYSTEM),
            Message::user(
                TRANSLATE_FROM_ENGLISH_PROMPT
                    .replace("{language}", &normalize_language(target))
                    .replace("{text}", text),
            ),
        ];
        match self.model.complete(&messages, STRUCTURED_TEMPERATURE).await {
            Ok(translated) => translated,
            Err(e) => {
                warn!("Reply translation to '{target}' failed, keeping English: {e}");
                text.to_string()
            }
        }
    }
}

fn normalize_language(code: &str) -> String {
    code.trim().to_lowercase()
}

fn is_working_language(code: &str) -> bool {
    normalize_language(code) == WORKING_LANGUAGE
}
