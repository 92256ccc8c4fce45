use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::{ChatGenerationConfig, GenerationConfig};
use crate::model::message::ChatMessage;

#[derive(Debug, Deserialize)]
pub struct PretrainedRequest {
    pub model: String,
    pub prompt: String,
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub direction: Option<String>,
    #[serde(default)]
    pub config: Value,
}

#[derive(Debug, Serialize)]
pub struct GenerateResponse {
    pub output: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapableRequest {
    pub model: String,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
    #[serde(default)]
    pub session_id: String,
    #[serde(default)]
    pub config: Value,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub output: String,
    pub session_name: String,
}

/// Wire payload for the completion tier.
#[derive(Debug, Serialize)]
pub struct CompletionPayload<'a> {
    pub model: &'a str,
    pub prompt: String,
    pub config: GenerationConfig,
}

/// Wire payload for the chat tier. `session_id` stays snake_case on the wire;
/// the normalized config rides along for replicas that honor it.
#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub session_id: &'a str,
    pub config: ChatGenerationConfig,
}
