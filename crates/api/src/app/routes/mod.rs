use axum::{
    routing::{delete, get, post},
    Router,
};

pub mod chat;
pub mod dashboard;
pub mod inventory;
pub mod navigation;
pub mod system;

/// Router for all session-scoped endpoints.
pub fn router() -> Router {
    Router::new()
        .route("/page", get(navigation::current_page))
        .route("/navigate", post(navigation::navigate))
        .route("/session", delete(navigation::reset_session))
        .nest("/dashboard", dashboard::router())
        .nest("/inventory", inventory::router())
        .nest("/chat", chat::router())
}
