//! Message orchestrator — one transition per user submission.
//!
//! Stateless between calls: all continuity lives in the `History` the caller
//! passes in and gets back.

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::capabilities::sentiment::{SentimentReading, SentimentScorer};
use crate::capabilities::translation::{Translation, Translator};
use crate::intake::exit::is_exit_request;
use crate::intake::fields::{extract_candidate_fields, CandidateFields};
use crate::intake::model_caller::ModelCaller;
use crate::intake::prompts::{
    tech_stack_question_prompt, CLOSING_REPLY, GREETING_PROMPT, SYSTEM_PROMPT,
};
use crate::intake::tech_stack::detect_tech_stack;
use crate::models::conversation::{History, Message};

/// User-side marker for the greeting turn produced by `start`.
pub const GREETING_MARKER: &str = "__system__";

/// Per-submission switches.
#[derive(Debug, Clone, Default)]
pub struct TurnOptions {
    pub detect_language: bool,
    /// Known source language; skips detection when set.
    pub language: Option<String>,
}

/// Result of one orchestrator step.
#[derive(Debug, Clone, Serialize)]
pub struct TurnOutcome {
    pub reply: String,
    pub history: History,
    /// True when an exit keyword closed the conversation.
    pub ended: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sentiment: Option<SentimentReading>,
    pub candidate: CandidateFields,
}

pub struct Orchestrator {
    model: ModelCaller,
    translator: Arc<dyn Translator>,
    sentiment: Arc<dyn SentimentScorer>,
}

impl Orchestrator {
    pub fn new(
        model: ModelCaller,
        translator: Arc<dyn Translator>,
        sentiment: Arc<dyn SentimentScorer>,
    ) -> Self {
        Self {
            model,
            translator,
            sentiment,
        }
    }

    /// Produces the opening greeting and records it as a turn under `GREETING_MARKER`.
    pub async fn start(&self, mut history: History) -> TurnOutcome {
        if !history.is_empty() {
            debug!("Greeting requested with {} prior turns", history.len());
        }
        let messages = [Message::system(SYSTEM_PROMPT), Message::user(GREETING_PROMPT)];
        let greeting = self.model.reply(&messages).await;
        history.push(GREETING_MARKER, greeting.clone());
        info!("Started intake conversation");

        TurnOutcome {
            reply: greeting,
            history,
            ended: false,
            tech_stack: None,
            sentiment: None,
            candidate: CandidateFields::default(),
        }
    }

    pub async fn process(
        &self,
        user_message: &str,
        mut history: History,
        options: &TurnOptions,
    ) -> TurnOutcome {
        let candidate = extract_candidate_fields(user_message);
        if !candidate.is_empty() {
            debug!("Extracted candidate fields: {candidate:?}");
        }

        // The closing exchange is not recorded.
        if is_exit_request(user_message) {
            info!("Exit keyword received after {} turns", history.len());
            return TurnOutcome {
                reply: CLOSING_REPLY.to_string(),
                history,
                ended: true,
                tech_stack: None,
                sentiment: None,
                candidate,
            };
        }

        let translation = if options.detect_language {
            self.translator
                .to_working_language(user_message, options.language.as_deref())
                .await
        } else {
            Translation::passthrough(user_message)
        };

        let sentiment = self.sentiment.score(&translation.text).await;

        let mut messages = build_conversation(&history);
        messages.push(Message::user(translation.text.clone()));

        let tech_stack = detect_tech_stack(&translation.text);
        if let Some(techs) = &tech_stack {
            debug!("Tech stack declared: {techs:?}");
            messages.push(Message::user(tech_stack_question_prompt(techs)));
        }

        let reply = self.model.reply(&messages).await;
        let mut reply = match &translation.source_language {
            Some(lang) => self.translator.from_working_language(&reply, lang).await,
            None => reply,
        };

        if tech_stack.is_none() {
            if let Some(reading) = &sentiment {
                reply = format!("{reply}\n\n[Sentiment detected: {reading}]");
            }
        }

        history.push(user_message, reply.clone());
        debug!("Turn {} recorded", history.len());

        TurnOutcome {
            reply,
            history,
            ended: false,
            tech_stack,
            sentiment,
            candidate,
        }
    }
}

/// System instruction followed by every prior turn as alternating user/assistant messages.
fn build_conversation(history: &History) -> Vec<Message> {
    std::iter::once(Message::system(SYSTEM_PROMPT))
        .chain(history.to_messages())
        .collect()
}
