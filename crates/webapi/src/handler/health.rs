use crate::state::AppState;
use axum::{Extension, Json, response::IntoResponse, routing::get};
use shared::{
    abstract_trait::health::DynHealthService,
    domain::responses::{ApiResponse, HealthResponse},
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service and database are reachable", body = ApiResponse<HealthResponse>),
        (status = 503, description = "Database unreachable")
    )
)]
pub async fn health_handler(
    Extension(service): Extension<DynHealthService>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.check().await?;
    Ok(Json(response))
}

pub fn health_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/health", get(health_handler))
        .layer(Extension(app_state.di_container.health_service.clone()))
}
