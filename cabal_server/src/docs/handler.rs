use axum::Json;
use utoipa::OpenApi;

use crate::docs::dto::ApiDoc;

#[utoipa::path(
    get,
    path = "/docs",
    description = "OpenAPI document",
    responses(
        (status = 200, description = "Success"),
    )
)]
pub async fn api_docs() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
