use serde::{Deserialize, Serialize};

/// Speaker of a single outbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }
}

/// A role-tagged message sent to the model. Rebuilt from `History` every turn,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
        }
    }
}

/// One completed exchange. The user side holds the text exactly as typed
/// (before translation).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Turn {
    pub user: String,
    pub assistant: String,
}

/// Ordered, append-only conversation transcript owned by a single session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct History(Vec<Turn>);

impl History {
    #[cfg(test)]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, user: impl Into<String>, assistant: impl Into<String>) {
        self.0.push(Turn {
            user: user.into(),
            assistant: assistant.into(),
        });
    }

    #[cfg(test)]
    pub fn turns(&self) -> &[Turn] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Flattens the transcript into alternating user/assistant messages.
    pub fn to_messages(&self) -> impl Iterator<Item = Message> + '_ {
        self.0.iter().flat_map(|turn| {
            [
                Message::user(turn.user.clone()),
                Message::assistant(turn.assistant.clone()),
            ]
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_serializes_as_plain_list() {
        let mut history = History::new();
        history.push("hi", "hello");
        let json = serde_json::to_value(&history).unwrap();
        assert_eq!(json, serde_json::json!([{"user": "hi", "assistant": "hello"}]));
    }

    #[test]
    fn test_history_flattens_in_order() {
        let mut history = History::new();
        history.push("u1", "a1");
        history.push("u2", "a2");
        let messages: Vec<Message> = history.to_messages().collect();
        assert_eq!(
            messages,
            vec![
                Message::user("u1"),
                Message::assistant("a1"),
                Message::user("u2"),
                Message::assistant("a2"),
            ]
        );
    }

    #[test]
    fn test_role_serde_is_lowercase() {
        let json = serde_json::to_string(&Role::Assistant).unwrap();
        assert_eq!(json, r#""assistant""#);
        assert_eq!(Role::System.as_str(), "system");
    }
}
