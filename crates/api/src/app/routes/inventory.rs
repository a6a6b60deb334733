use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    http::header,
    response::IntoResponse,
    routing::get,
    Json, Router,
};

use stockdeck_query::{apply, to_csv, EXPORT_FILENAME};

use crate::app::services::AppServices;
use crate::app::{dto, errors, views};

pub fn router() -> Router {
    Router::new()
        .route("/", get(list_inventory))
        .route("/export", get(export_inventory))
}

/// The filterable table: facet options plus the rows matching the
/// criteria on the query string. Pure read; session state is untouched.
pub async fn list_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::InventoryQuery>,
) -> axum::response::Response {
    let criteria = query.into_criteria();
    Json(views::inventory_view(&services.catalog, &criteria)).into_response()
}

/// The same filtered view as a downloadable CSV artifact.
pub async fn export_inventory(
    Extension(services): Extension<Arc<AppServices>>,
    Query(query): Query<dto::InventoryQuery>,
) -> axum::response::Response {
    let criteria = query.into_criteria();
    let rows = apply(&services.catalog, &criteria);

    match to_csv(&rows) {
        Ok(body) => {
            tracing::debug!(rows = rows.len(), "inventory exported");
            (
                [
                    (header::CONTENT_TYPE, "text/csv".to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{EXPORT_FILENAME}\""),
                    ),
                ],
                body,
            )
                .into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}
