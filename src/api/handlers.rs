use axum::extract::{Json, State};
use serde_json::{json, Value};
use tracing::info;

use crate::{
    api::error::ApiError,
    api::types::{
        CapableRequest, ChatPayload, ChatResponse, CompletionPayload, GenerateResponse,
        PretrainedRequest,
    },
    config::{ChatGenerationConfig, GenerationConfig},
    dispatch::PREDICT_TIMEOUT,
    prompts, registry, response,
    AppState,
};

/// POST /api/models/pretrained — single-prompt generation against the
/// completion-tier replicas.
pub async fn pretrained_generate(
    State(state): State<AppState>,
    Json(req): Json<PretrainedRequest>,
) -> Result<Json<GenerateResponse>, ApiError> {
    if req.model.trim().is_empty() || req.prompt.trim().is_empty() {
        return Err(ApiError::InvalidRequest(
            "Model and prompt are required".to_string(),
        ));
    }

    let config = GenerationConfig::from_value(&req.config);
    let prompt = prompts::build_prompt(
        &req.model,
        req.task.as_deref().unwrap_or(prompts::UNSET),
        req.language.as_deref().unwrap_or(prompts::UNSET),
        req.direction.as_deref(),
        &req.prompt,
    );

    info!(model = %req.model, "dispatching completion request");

    let payload = CompletionPayload {
        model: &req.model,
        prompt,
        config,
    };
    let body = state
        .dispatcher
        .dispatch(&state.completion_endpoints, &payload, PREDICT_TIMEOUT)
        .await?;

    Ok(Json(GenerateResponse {
        output: response::unify_completion(&body),
    }))
}

/// POST /api/models/capable — chat-history generation against the chat-tier
/// replicas. History is caller-owned and passed by value; nothing is retained
/// here between calls.
pub async fn capable_generate(
    State(state): State<AppState>,
    Json(req): Json<CapableRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    if req.model.trim().is_empty() || req.messages.is_empty() {
        return Err(ApiError::InvalidRequest(
            "Model and messages are required".to_string(),
        ));
    }

    let config = ChatGenerationConfig::from_value(&req.config);

    info!(model = %req.model, turns = req.messages.len(), "dispatching chat request");

    let payload = ChatPayload {
        model: &req.model,
        messages: &req.messages,
        session_id: &req.session_id,
        config,
    };
    let body = state
        .dispatcher
        .dispatch(&state.chat_endpoints, &payload, PREDICT_TIMEOUT)
        .await?;

    let unified = response::unify_chat(&body);
    Ok(Json(ChatResponse {
        output: unified.output,
        session_name: unified.session_name,
    }))
}

/// GET /api/models — the catalog plus each model's interaction shape, so the
/// frontend can render selectors without hardcoding the table.
pub async fn list_models() -> Json<Value> {
    let models: Vec<Value> = registry::MODELS
        .iter()
        .map(|entry| {
            let behavior = registry::behavior_for(entry.id);
            json!({
                "id": entry.id,
                "name": entry.name,
                "repo": entry.repo,
                "tier": entry.tier,
                "behavior": behavior,
            })
        })
        .collect();

    Json(json!({ "models": models }))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "models": registry::MODELS.iter().map(|m| m.id).collect::<Vec<_>>(),
    }))
}
