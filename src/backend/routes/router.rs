//! Router Configuration
//!
//! Combines every chat route into one Axum router and applies the shared
//! middleware stack.
//!
//! # Routes
//!
//! - `POST /participants` - log in
//! - `GET /participants` - list participants
//! - `POST /messages` - post a message (`user` header)
//! - `GET /messages` - read visible messages (`user` header, `?limit=`)
//! - `POST /status` - heartbeat (`user` header)
//!
//! # Middleware
//!
//! - `TraceLayer` - one tracing span per request
//! - `CorsLayer::permissive()` - browser clients are served from anywhere

use axum::{
    http::StatusCode,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::backend::messages::{get_messages, post_message};
use crate::backend::presence::{heartbeat, list_participants, register_participant};
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = Router::new()
        .route(
            "/participants",
            get(list_participants).post(register_participant),
        )
        .route("/messages", get(get_messages).post(post_message))
        .route("/status", post(heartbeat))
        .fallback(|| async { (StatusCode::NOT_FOUND, "404 Not Found") });

    let router = router.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::permissive()),
    );

    router.with_state(app_state)
}
