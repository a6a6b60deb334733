use axum::{
    extract::State,
    http::{HeaderMap, HeaderValue},
    middleware::Next,
    response::Response,
};

use stockdeck_core::SessionId;

use crate::app::services::SessionRegistry;
use crate::context::SessionContext;

/// Header carrying the session identifier both ways: sent by the client to
/// stay in its session, echoed back on every response (minted fresh when
/// absent or malformed).
pub const SESSION_HEADER: &str = "x-session-id";

#[derive(Clone)]
pub struct SessionLayerState {
    pub sessions: SessionRegistry,
}

pub async fn session_middleware(
    State(state): State<SessionLayerState>,
    mut req: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Response {
    let id = extract_session_id(req.headers()).unwrap_or_else(SessionId::new);

    let session = state.sessions.resolve(id);
    req.extensions_mut().insert(SessionContext::new(id, session));

    let mut res = next.run(req).await;

    if let Ok(value) = HeaderValue::from_str(&id.to_string()) {
        res.headers_mut().insert(SESSION_HEADER, value);
    }

    res
}

fn extract_session_id(headers: &HeaderMap) -> Option<SessionId> {
    let header = headers.get(SESSION_HEADER)?;
    let header = header.to_str().ok()?;
    header.trim().parse().ok()
}
