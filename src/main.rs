//! Animo Content Backend
//!
//! REST backend for the Animo merchant directory and blog: an authenticated
//! admin surface for merchants, posts, and the global contact link, and a
//! public surface serving rendered page fragments from SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod render;
mod text;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use auth::SessionStore;
use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub sessions: Arc<SessionStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Animo Content Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if no admin account is configured
    if config.admin_email.is_none() || config.admin_password.is_none() {
        tracing::warn!(
            "No admin account configured (ANIMO_ADMIN_EMAIL / ANIMO_ADMIN_PASSWORD). Login is disabled!"
        );
    }

    // Initialize database before binding: requests never race the migrations
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        sessions: Arc::new(SessionStore::new()),
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
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

    // Clone the session store for the auth layer
    let sessions = state.sessions.clone();

    // Admin routes behind session authentication
    let admin_routes = Router::new()
        // Merchants
        .route("/merchants", get(api::list_merchants))
        .route("/merchants", post(api::create_merchant))
        .route("/merchants/{id}", get(api::get_merchant))
        .route("/merchants/{id}", put(api::update_merchant))
        .route("/merchants/{id}", delete(api::delete_merchant))
        // Posts
        .route("/posts", get(api::list_posts))
        .route("/posts", post(api::create_post))
        .route("/posts/{id}", get(api::get_post))
        .route("/posts/{id}", put(api::update_post))
        .route("/posts/{id}", delete(api::delete_post))
        // Global settings
        .route("/settings", get(api::get_settings))
        .route("/settings", put(api::update_settings))
        // Apply session auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::session_auth_layer(sessions.clone(), req, next)
        }));

    // Auth routes (no session required; logout is a no-op without one)
    let auth_routes = Router::new()
        .route("/login", post(api::login))
        .route("/logout", post(api::logout))
        .route("/session", get(api::session));

    // Public routes (no auth required)
    let public_routes = Router::new()
        .route("/global-link", get(api::global_link))
        .route("/fragments/merchants", get(api::merchants_fragment))
        .route("/fragments/blog", get(api::blog_fragment))
        .route("/fragments/home-carousel", get(api::home_carousel_fragment))
        .route("/fragments/post", get(api::post_fragment));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api/admin", admin_routes)
        .nest("/api/auth", auth_routes)
        .nest("/public", public_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
