use serde::Serialize;
use serde_json::Value;

// Defaults for the completion tier. The eos token id is fixed by the serving
// side's tokenizer and is not caller-tunable.
const DEFAULT_MAX_LENGTH: u32 = 100;
const DEFAULT_MAX_NEW_TOKENS: u32 = 80;
const DEFAULT_NUM_BEAMS: u32 = 5;
const DEFAULT_TEMPERATURE: f64 = 0.99;
const DEFAULT_TOP_K: u32 = 50;
const DEFAULT_TOP_P: f64 = 0.95;
const DEFAULT_REPETITION_PENALTY: f64 = 4.0;
const DEFAULT_LENGTH_PENALTY: f64 = 3.0;
pub const END_OF_TOKEN_ID: u32 = 32;

// Defaults for the chat tier.
const CHAT_MAX_NEW_TOKENS: u32 = 256;
const CHAT_TEMPERATURE: f64 = 0.7;
const CHAT_TOP_P: f64 = 0.9;
const CHAT_TOP_K: u32 = 50;
const CHAT_REPETITION_PENALTY: f64 = 1.1;

/// Fully-populated generation knobs for the completion tier, serialized with the
/// camelCase field names the replicas expect. Built once per request from
/// whatever the caller sent and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub max_length: u32,
    pub max_new_tokens: u32,
    pub num_beams: u32,
    pub do_sample: bool,
    pub temperature: f64,
    pub top_k: u32,
    pub top_p: f64,
    pub repetition_penalty: f64,
    pub length_penalty: f64,
    pub early_stopping: bool,
    pub eos_token_id: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
            max_new_tokens: DEFAULT_MAX_NEW_TOKENS,
            num_beams: DEFAULT_NUM_BEAMS,
            do_sample: false,
            temperature: DEFAULT_TEMPERATURE,
            top_k: DEFAULT_TOP_K,
            top_p: DEFAULT_TOP_P,
            repetition_penalty: DEFAULT_REPETITION_PENALTY,
            length_penalty: DEFAULT_LENGTH_PENALTY,
            early_stopping: true,
            eos_token_id: END_OF_TOKEN_ID,
        }
    }
}

impl GenerationConfig {
    /// Normalize an untyped caller config. Fields may be absent or arrive as
    /// strings; anything that does not coerce falls back to its default. Total —
    /// the result always has every field set.
    pub fn from_value(raw: &Value) -> Self {
        let defaults = Self::default();
        Self {
            max_length: coerce_u32(raw.get("maxLength")).unwrap_or(defaults.max_length),
            max_new_tokens: coerce_u32(raw.get("maxNewTokens")).unwrap_or(defaults.max_new_tokens),
            num_beams: coerce_u32(raw.get("numBeams")).unwrap_or(defaults.num_beams),
            do_sample: coerce_bool(raw.get("doSample")).unwrap_or(defaults.do_sample),
            temperature: coerce_f64(raw.get("temperature")).unwrap_or(defaults.temperature),
            top_k: coerce_u32(raw.get("topK")).unwrap_or(defaults.top_k),
            top_p: coerce_f64(raw.get("topP")).unwrap_or(defaults.top_p),
            repetition_penalty: coerce_f64(raw.get("repetitionPenalty"))
                .unwrap_or(defaults.repetition_penalty),
            length_penalty: coerce_f64(raw.get("lengthPenalty"))
                .unwrap_or(defaults.length_penalty),
            early_stopping: true,
            eos_token_id: END_OF_TOKEN_ID,
        }
    }
}

/// Chat-tier generation knobs. The capable replicas run their own template and
/// decoding loop, so this is a smaller table with sampling enabled by default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatGenerationConfig {
    pub max_new_tokens: u32,
    pub temperature: f64,
    pub top_p: f64,
    pub top_k: u32,
    pub repetition_penalty: f64,
    pub do_sample: bool,
}

impl Default for ChatGenerationConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: CHAT_MAX_NEW_TOKENS,
            temperature: CHAT_TEMPERATURE,
            top_p: CHAT_TOP_P,
            top_k: CHAT_TOP_K,
            repetition_penalty: CHAT_REPETITION_PENALTY,
            do_sample: true,
        }
    }
}

impl ChatGenerationConfig {
    pub fn from_value(raw: &Value) -> Self {
        let defaults = Self::default();
        Self {
            max_new_tokens: coerce_u32(raw.get("maxNewTokens")).unwrap_or(defaults.max_new_tokens),
            temperature: coerce_f64(raw.get("temperature")).unwrap_or(defaults.temperature),
            top_p: coerce_f64(raw.get("topP")).unwrap_or(defaults.top_p),
            top_k: coerce_u32(raw.get("topK")).unwrap_or(defaults.top_k),
            repetition_penalty: coerce_f64(raw.get("repetitionPenalty"))
                .unwrap_or(defaults.repetition_penalty),
            do_sample: coerce_bool(raw.get("doSample")).unwrap_or(defaults.do_sample),
        }
    }
}

fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_u32(value: Option<&Value>) -> Option<u32> {
    match value? {
        Value::Number(n) => n.as_u64().and_then(|v| u32::try_from(v).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn coerce_bool(value: Option<&Value>) -> Option<bool> {
    match value? {
        Value::Bool(b) => Some(*b),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
