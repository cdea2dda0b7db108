//! Scripted `ChatModel` for unit tests. Records every outbound message list.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use super::{ChatModel, LlmError};
use crate::models::conversation::Message;

pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<String, u16>>>,
    calls: Mutex<Vec<Vec<Message>>>,
}

impl ScriptedModel {
    /// Answers every call with `reply`.
    pub fn replying(reply: &str) -> Self {
        Self::with_replies(vec![Ok(reply.to_string())])
    }

    /// Fails every call with an API error.
    pub fn failing() -> Self {
        Self::with_replies(vec![Err(503)])
    }

    /// Plays `replies` in order; the last one repeats once the queue runs dry.
    pub fn with_replies(replies: Vec<Result<String, u16>>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<Vec<Message>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatModel for ScriptedModel {
    async fn complete(&self, messages: &[Message], _temperature: f32) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(messages.to_vec());
        let mut replies = self.replies.lock().unwrap();
        let next = if replies.len() > 1 {
            replies.pop_front()
        } else {
            replies.front().cloned()
        };
        match next {
            Some(Ok(text)) => Ok(text),
            Some(Err(status)) => Err(LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            }),
            None => Err(LlmError::EmptyContent),
        }
    }
}
