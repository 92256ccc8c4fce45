use serde_json::Value;

pub const NO_RESPONSE: &str = "No response generated";
pub const DEFAULT_SESSION_NAME: &str = "New Chat";

/// What the gateway hands back regardless of which replica answered or what
/// shape its body took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnifiedOutput {
    pub output: String,
    pub session_name: String,
}

/// Normalize a completion-tier success body. JSON bodies yield their `output`
/// (or `response`) field; anything that does not parse is taken verbatim as
/// plain text. Empty extractions degrade to the placeholder — this never fails.
pub fn unify_completion(body: &str) -> String {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => extract_text(&json).unwrap_or_else(|| NO_RESPONSE.to_string()),
        Err(_) => non_empty(body).unwrap_or_else(|| NO_RESPONSE.to_string()),
    }
}

/// Normalize a chat-tier success body: same text extraction plus the session
/// label, which defaults to "New Chat" when the backend sends none.
pub fn unify_chat(body: &str) -> UnifiedOutput {
    match serde_json::from_str::<Value>(body) {
        Ok(json) => UnifiedOutput {
            output: extract_text(&json).unwrap_or_else(|| NO_RESPONSE.to_string()),
            session_name: extract_session_name(&json)
                .unwrap_or_else(|| DEFAULT_SESSION_NAME.to_string()),
        },
        Err(_) => UnifiedOutput {
            output: non_empty(body).unwrap_or_else(|| NO_RESPONSE.to_string()),
            session_name: DEFAULT_SESSION_NAME.to_string(),
        },
    }
}

fn extract_text(json: &Value) -> Option<String> {
    string_field(json, "output").or_else(|| string_field(json, "response"))
}

fn extract_session_name(json: &Value) -> Option<String> {
    string_field(json, "session_name").or_else(|| string_field(json, "sessionName"))
}

fn string_field(json: &Value, key: &str) -> Option<String> {
    json.get(key)
        .and_then(Value::as_str)
        .and_then(non_empty)
}

fn non_empty(s: &str) -> Option<String> {
    if s.is_empty() {
        None
    } else {
        Some(s.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_response_field_wins() {
        assert_eq!(unify_completion(r#"{"response": "hello"}"#), "hello");
    }

    #[test]
    fn output_field_beats_response_field() {
        assert_eq!(
            unify_completion(r#"{"output": "first", "response": "second"}"#),
            "first"
        );
    }

    #[test]
    fn plain_text_body_is_taken_verbatim() {
        assert_eq!(unify_completion("hello"), "hello");
    }

    #[test]
    fn empty_body_degrades_to_placeholder() {
        assert_eq!(unify_completion(""), NO_RESPONSE);
        assert_eq!(unify_completion(r#"{"output": ""}"#), NO_RESPONSE);
        assert_eq!(unify_completion(r#"{"status": "done"}"#), NO_RESPONSE);
    }

    #[test]
    fn malformed_json_never_errors() {
        assert_eq!(unify_completion(r#"{"output": "#), r#"{"output": "#);
    }

    #[test]
    fn chat_session_name_variants() {
        let snake = unify_chat(r#"{"output": "hi", "session_name": "Greetings"}"#);
        assert_eq!(snake.session_name, "Greetings");

        let camel = unify_chat(r#"{"output": "hi", "sessionName": "Greetings"}"#);
        assert_eq!(camel.session_name, "Greetings");

        let missing = unify_chat(r#"{"output": "hi"}"#);
        assert_eq!(missing.session_name, DEFAULT_SESSION_NAME);
    }

    #[test]
    fn chat_plain_text_gets_default_session_name() {
        let unified = unify_chat("just text");
        assert_eq!(unified.output, "just text");
        assert_eq!(unified.session_name, DEFAULT_SESSION_NAME);
    }
}
