use serde::{Deserialize, Serialize};

/// One turn of a chat history. The gateway never stores these; the caller owns
/// the session and resends the full history on every request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}
