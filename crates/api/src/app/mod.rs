//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: shared wiring (catalog store, session registry)
//! - `routes/`: HTTP routes + handlers (one file per page area)
//! - `views.rs`: the render step — page state in, page view out
//! - `dto.rs`: request DTOs and criteria mapping
//! - `errors.rs`: consistent error responses

use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use crate::middleware;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;
pub mod views;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub fn build_app() -> Router {
    let services = Arc::new(services::build_services());
    let session_state = middleware::SessionLayerState {
        sessions: services.sessions.clone(),
    };

    // Session-scoped routes: everything that reads or mutates page and
    // transcript state runs under the session middleware.
    let session_scoped = routes::router()
        .layer(Extension(services))
        .layer(axum::middleware::from_fn_with_state(
            session_state,
            middleware::session_middleware,
        ));

    Router::new()
        .route("/health", get(routes::system::health))
        .merge(session_scoped)
        .layer(ServiceBuilder::new())
}
