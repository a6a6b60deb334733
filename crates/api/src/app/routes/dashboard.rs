use std::sync::Arc;

use axum::{extract::Extension, response::IntoResponse, routing::get, Json, Router};

use crate::app::services::AppServices;

pub fn router() -> Router {
    Router::new().route("/", get(summary))
}

/// Metric cards and chart series for the dashboard page.
pub async fn summary(Extension(services): Extension<Arc<AppServices>>) -> axum::response::Response {
    Json(services.catalog.summary()).into_response()
}
