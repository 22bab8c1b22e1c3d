//! AI Jurisdiction Backend
//!
//! Serves the case workspace and the signed-in session of the AI Jurisdiction
//! frontend, plus health, mock sign-in and chat endpoints.

mod api;
mod auth;
mod cases;
mod chat;
mod config;
mod errors;
mod models;
mod session;
mod storage;

use std::sync::Arc;

use axum::{
    routing::{delete, get, patch, post, put},
    Json, Router,
};
use serde_json::{json, Value};
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::AuthStore;
use cases::CaseStore;
use chat::ChatRepository;
use config::{Config, LogFormat};
use session::SessionStore;

/// Application state shared across all handlers.
///
/// `SessionStore` is cheap to clone and its storage backend serializes its
/// own access, so it needs no lock here.
#[derive(Clone)]
pub struct AppState {
    pub session: SessionStore,
    pub cases: Arc<RwLock<CaseStore>>,
    pub auth: Arc<RwLock<AuthStore>>,
    pub chat: Arc<RwLock<ChatRepository>>,
}

impl AppState {
    /// Build fresh stores for `config`.
    pub fn new(config: &Config) -> Self {
        let storage = storage::open(&config.session_storage);
        let cases = if config.seed_cases {
            CaseStore::seeded()
        } else {
            CaseStore::default()
        };

        Self {
            session: SessionStore::new(storage),
            cases: Arc::new(RwLock::new(cases)),
            auth: Arc::new(RwLock::new(AuthStore::new())),
            chat: Arc::new(RwLock::new(ChatRepository::new())),
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }

    tracing::info!("Starting AI Jurisdiction Backend");
    tracing::info!("Session storage: {:?}", config.session_storage);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.session_storage == storage::StorageBackend::Disabled {
        tracing::warn!("Session storage disabled (AIJ_SESSION_STORAGE). Sign-ins will not persist!");
    }

    let state = AppState::new(&config);
    tracing::info!(
        "Case workspace ready with {} cases",
        state.cases.read().await.cases().len()
    );

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // API routes
    let api_routes = Router::new()
        // Session
        .route("/session", get(api::get_session))
        .route("/session", delete(api::clear_session))
        // Mock sign-in
        .route("/auth", get(api::get_auth_state))
        .route("/auth/sign-in", post(api::sign_in))
        .route("/auth/sign-out", post(api::sign_out))
        // Cases
        .route("/cases", get(api::list_cases))
        .route("/cases", post(api::create_case))
        .route("/cases/active", get(api::get_active_case))
        .route("/cases/active", put(api::set_active_case))
        .route("/cases/{id}", get(api::get_case))
        .route("/cases/{id}", patch(api::update_case))
        .route("/cases/{id}/role", put(api::set_case_role))
        .route("/cases/{id}/mode", put(api::set_case_mode))
        .route("/cases/{id}/interactions", post(api::add_interaction));

    // Chat
    let chat_routes = Router::new()
        .route("/sessions", post(api::create_chat_session))
        .route("/messages", post(api::create_chat_message))
        .route("/sessions/{id}/messages", get(api::list_chat_messages));

    // Health, version and the identity-provider callback
    let public_routes = Router::new()
        .route("/health", get(health_check))
        .route("/version", get(version))
        .route("/auth/callback", get(api::auth_callback));

    Router::new()
        .nest("/api", api_routes)
        .nest("/v1/chat", chat_routes)
        .merge(public_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// Service name and version.
async fn version() -> Json<Value> {
    Json(json!({
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests;
