use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use sabiyarn_gateway::{create_router, dispatch, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // -----------------------------
    // Logging
    // -----------------------------
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .init();

    // -----------------------------
    // Replica configuration
    // -----------------------------
    let workspaces: Vec<String> = match dotenvy::var("SABIYARN_WORKSPACES") {
        Ok(raw) => raw
            .split(',')
            .map(str::trim)
            .filter(|ws| !ws.is_empty())
            .map(str::to_string)
            .collect(),
        Err(_) => dispatch::WORKSPACES.iter().map(|ws| ws.to_string()).collect(),
    };

    let state = AppState::with_workspaces(&workspaces);

    println!(
        "🚀 Starting SabiYarn gateway ({} replicas per tier)...",
        workspaces.len()
    );

    // -----------------------------
    // Router
    // -----------------------------
    let app = create_router(state)
        // CORS for the marketing frontend
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_headers(Any)
                .allow_methods(Any),
        );

    let addr = dotenvy::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());

    println!("🌐 HTTP listening on http://{addr}");
    println!("🛠 Completion API at http://{addr}/api/models/pretrained");
    println!("💬 Chat API at http://{addr}/api/models/capable");

    let listener = TcpListener::bind(&addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
