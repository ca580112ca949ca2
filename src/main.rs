//! Freelancer Portal Backend
//!
//! A REST backend for a freelancer job marketplace with SQLite persistence:
//! job search with dynamic filters, an application lifecycle, notification
//! fan-out, and role-specific dashboards.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod matching;
mod models;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
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

    tracing::info!("Starting Freelancer Portal Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    if config.gateway_psk.is_none() {
        tracing::warn!("No gateway PSK configured (PORTAL_GATEWAY_PSK). API key check is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
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

    // Clone PSK for the auth layer
    let psk = state.config.gateway_psk.clone();

    // Public catalog routes: PSK check applies, identity does not.
    let public_routes = Router::new()
        .route("/jobs", get(api::jobs::search_jobs))
        .route("/jobs/{id}", get(api::jobs::get_job));

    // Authenticated routes: caller identity resolved from headers.
    let authed_routes = Router::new()
        // Recruiter
        .route("/recruiter/jobs", post(api::recruiter::create_job))
        .route("/recruiter/jobs", get(api::recruiter::list_recruiter_jobs))
        .route(
            "/recruiter/jobs/{id}/applications",
            get(api::recruiter::list_job_applications),
        )
        .route(
            "/recruiter/applications/{id}/status",
            put(api::recruiter::update_application_status),
        )
        .route(
            "/recruiter/dashboard",
            get(api::recruiter::recruiter_dashboard),
        )
        // Freelancer
        .route(
            "/freelancer/jobs/{id}/apply",
            post(api::freelancer::apply_to_job),
        )
        .route(
            "/freelancer/applications",
            get(api::freelancer::list_freelancer_applications),
        )
        .route(
            "/freelancer/dashboard",
            get(api::freelancer::freelancer_dashboard),
        )
        // Notifications
        .route("/notifications", get(api::notifications::list_notifications))
        .route(
            "/notifications/unread/count",
            get(api::notifications::unread_count),
        )
        .route(
            "/notifications/{id}/read",
            post(api::notifications::mark_read),
        )
        .route(
            "/notifications/read-all",
            post(api::notifications::mark_all_read),
        )
        .layer(middleware::from_fn_with_state(
            state.clone(),
            auth::identity_layer,
        ));

    // Apply PSK auth to everything under /api
    let api_routes = public_routes.merge(authed_routes).layer(middleware::from_fn(
        move |req, next| auth::psk_auth_layer(psk.clone(), req, next),
    ));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
