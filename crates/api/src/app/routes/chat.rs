use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockdeck_chat::{answer, ChatTurn};

use crate::app::services::AppServices;
use crate::app::{dto, errors, views};
use crate::context::SessionContext;

pub fn router() -> Router {
    Router::new().route("/", get(get_transcript).post(post_message))
}

pub async fn get_transcript(
    Extension(ctx): Extension<SessionContext>,
) -> axum::response::Response {
    let view = ctx.with_state(|state| views::chat_view(state));
    Json(view).into_response()
}

/// One chat interaction: append the user turn, look the query up, append
/// the assistant turn, then render.
///
/// Blank input is rejected here; the matcher itself never trims or
/// validates.
pub async fn post_message(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
    Json(body): Json<dto::ChatRequest>,
) -> axum::response::Response {
    if body.text.trim().is_empty() {
        return errors::json_error(
            StatusCode::BAD_REQUEST,
            "validation_error",
            "message text must not be blank",
        );
    }

    let reply = answer(&services.catalog, &body.text);

    let view = ctx.with_state(|state| {
        state.push_turn(ChatTurn::user(body.text.clone()));
        state.push_turn(ChatTurn::assistant(reply.clone()));
        views::chat_view(state)
    });

    tracing::debug!(session = %ctx.session_id(), "chat turn answered");
    Json(view).into_response()
}
