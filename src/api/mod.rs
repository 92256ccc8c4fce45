use axum::{
    routing::{get, post},
    Router,
};

use crate::AppState;

pub mod error;
pub mod handlers;
pub mod types;

use handlers::{capable_generate, health, list_models, pretrained_generate};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/models/pretrained", post(pretrained_generate))
        .route("/api/models/capable", post(capable_generate))
        .route("/api/models", get(list_models))
        .route("/health", get(health))
}
