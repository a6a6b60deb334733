use std::sync::Arc;

use axum::{extract::Extension, http::StatusCode, response::IntoResponse, Json};

use stockdeck_query::Criteria;
use stockdeck_session::Page;

use crate::app::services::AppServices;
use crate::app::{dto, errors, views};
use crate::context::SessionContext;

/// Render the page the session is currently on.
pub async fn current_page(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> axum::response::Response {
    let view = ctx.with_state(|state| views::render(&services.catalog, state, &Criteria::default()));
    Json(view).into_response()
}

/// Explicit navigation action: set the page, then render it.
///
/// An out-of-set page name is rejected with 400 and the session is left
/// exactly as it was (page and transcript both untouched).
pub async fn navigate(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
    Json(body): Json<dto::NavigateRequest>,
) -> axum::response::Response {
    let page: Page = match body.page.parse() {
        Ok(page) => page,
        Err(e) => return errors::domain_error_to_response(e),
    };

    let view = ctx.with_state(|state| {
        state.set_page(page);
        views::render(&services.catalog, state, &Criteria::default())
    });

    tracing::debug!(session = %ctx.session_id(), page = %page, "navigated");
    Json(view).into_response()
}

/// Tear the session down. The next interaction under the same id starts
/// fresh on the dashboard with an empty transcript.
pub async fn reset_session(
    Extension(services): Extension<Arc<AppServices>>,
    Extension(ctx): Extension<SessionContext>,
) -> axum::response::Response {
    services.sessions.reset(&ctx.session_id());
    StatusCode::NO_CONTENT.into_response()
}
