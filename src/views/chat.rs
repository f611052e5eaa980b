use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::Backend;
use crate::logging::{log_view, v_str};

pub const FALLBACK_REPLY: &str =
    "Sorry, I'm having trouble connecting to the server. Please ensure the backend is running.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    fn new(role: Role, content: &str) -> Self {
        Self { role, content: content.to_string() }
    }
}

/// Landing-page agent chat: a transcript, an input box and a busy flag.
#[derive(Debug, Clone, Serialize)]
pub struct ChatDemo {
    messages: Vec<ChatMessage>,
    input: String,
    loading: bool,
}

impl Default for ChatDemo {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatDemo {
    pub fn new() -> Self {
        Self {
            messages: vec![
                ChatMessage::new(Role::User, "How is our cash flow looking for the next 7 days?"),
                ChatMessage::new(
                    Role::Assistant,
                    "Based on recent sales from Square and Clover, plus upcoming bills, \
                     you're projected to have positive cash flow. However, a large \
                     inventory payment is due on Friday.",
                ),
            ],
            input: String::new(),
            loading: false,
        }
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn set_input(&mut self, text: &str) {
        self.input = text.to_string();
    }

    /// First half of a send: moves the input into the transcript. Returns the
    /// message to deliver, or `None` when the input is blank or a reply is
    /// still pending.
    pub fn submit(&mut self) -> Option<String> {
        if self.loading || self.input.trim().is_empty() {
            return None;
        }
        let message = std::mem::take(&mut self.input);
        self.messages.push(ChatMessage::new(Role::User, &message));
        self.loading = true;
        Some(message)
    }

    /// Second half of a send: appends the reply, or the fallback on failure.
    pub fn resolve(&mut self, reply: anyhow::Result<String>) {
        let content = match reply {
            Ok(text) => text,
            Err(err) => {
                log_view("chat", "reply_failed", &[("msg", v_str(&err.to_string()))]);
                FALLBACK_REPLY.to_string()
            }
        };
        self.messages.push(ChatMessage::new(Role::Assistant, &content));
        self.loading = false;
    }

    pub async fn send(&mut self, backend: &dyn Backend) {
        let Some(message) = self.submit() else {
            return;
        };
        log_view("chat", "send", &[("chars", json!(message.len()))]);
        let reply = backend.chat(&message).await.map(|r| r.response);
        self.resolve(reply);
    }
}
