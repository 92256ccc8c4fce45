//! HTTP gateway in front of the externally hosted SabiYarn serving replicas.
//!
//! Shapes caller prompts and chat histories into backend payloads, fails over
//! across redundant replicas, and normalizes whatever they answer with. The
//! gateway itself is stateless: sessions live with the caller.

use std::sync::Arc;

use axum::Router;

pub mod api;
pub mod config;
pub mod dispatch;
pub mod model;
pub mod prompts;
pub mod registry;
pub mod response;

use dispatch::{EndpointSet, FailoverDispatcher};

#[derive(Clone)]
pub struct AppState {
    pub dispatcher: Arc<FailoverDispatcher>,
    pub completion_endpoints: Arc<EndpointSet>,
    pub chat_endpoints: Arc<EndpointSet>,
}

impl AppState {
    /// State over the default replica set.
    pub fn new() -> Self {
        Self::with_workspaces(dispatch::WORKSPACES)
    }

    pub fn with_workspaces(workspaces: &[impl AsRef<str>]) -> Self {
        Self {
            dispatcher: Arc::new(FailoverDispatcher::new()),
            completion_endpoints: Arc::new(EndpointSet::completion(workspaces)),
            chat_endpoints: Arc::new(EndpointSet::chat(workspaces)),
        }
    }

    /// State with explicit endpoint lists, used by tests to point the gateway
    /// at stub replicas.
    pub fn with_endpoints(completion: EndpointSet, chat: EndpointSet) -> Self {
        Self {
            dispatcher: Arc::new(FailoverDispatcher::new()),
            completion_endpoints: Arc::new(completion),
            chat_endpoints: Arc::new(chat),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

pub fn create_router(state: AppState) -> Router {
    api::router().with_state(state)
}
