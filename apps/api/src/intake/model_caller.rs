use std::sync::Arc;

use tracing::warn;

use crate::intake::prompts::MODEL_UNAVAILABLE_REPLY;
use crate::llm_client::ChatModel;
use crate::models::conversation::Message;

/// Wraps a `ChatModel` so that callers always get text back.
/// Any failure is logged and replaced by `MODEL_UNAVAILABLE_REPLY`.
#[derive(Clone)]
pub struct ModelCaller {
    model: Arc<dyn ChatModel>,
    temperature: f32,
}

impl ModelCaller {
    pub fn new(model: Arc<dyn ChatModel>, temperature: f32) -> Self {
        Self { model, temperature }
    }

    pub async fn reply(&self, messages: &[Message]) -> String {
        match self.model.complete(messages, self.temperature).await {
            Ok(text) => text,
            Err(e) => {
                warn!("LLM call failed: {e}");
                MODEL_UNAVAILABLE_REPLY.to_string()
            }
        }
    }
}
