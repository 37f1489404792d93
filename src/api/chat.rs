//! Chat assistant endpoint

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::api::client::ApiClient;
use crate::error::Result;

/// Message sent to the assistant.
#[derive(Debug, Serialize)]
pub struct ChatRequest {
    /// User message text
    pub message: String,
    /// Correlates multi-turn flows on the server side
    pub request_id: Uuid,
}

/// Canonical chat reply: `{ response, suggestions }`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatReply {
    /// Assistant response text
    pub response: String,
    /// Follow-up suggestions, if the assistant offers any
    #[serde(default)]
    pub suggestions: Vec<String>,
}

impl ApiClient {
    /// Send a message to the assistant, starting a new request flow.
    pub async fn send_chat_message(&self, message: &str) -> Result<ChatReply> {
        self.continue_chat(message, Uuid::new_v4()).await
    }

    /// Send a message within an existing request flow.
    pub async fn continue_chat(&self, message: &str, request_id: Uuid) -> Result<ChatReply> {
        let request = ChatRequest {
            message: message.to_string(),
            request_id,
        };
        self.post("/chat", &request).await
    }
}
