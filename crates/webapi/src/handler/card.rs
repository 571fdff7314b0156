use crate::{
    middleware::{jwt, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Path,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::card::service::{DynCardCommandService, DynCardQueryService},
    domain::{
        requests::card::CreateCardRequest,
        responses::{ApiResponse, CardResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/cards",
    tag = "Card",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Cards of the current user", body = ApiResponse<Vec<CardResponse>>),
        (status = 403, description = "Missing or invalid token")
    )
)]
pub async fn get_cards(
    Extension(service): Extension<DynCardQueryService>,
    Extension(user_id): Extension<i32>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_all(user_id).await?;
    Ok(Json(response))
}

#[utoipa::path(
    get,
    path = "/api/cards/{card_number}",
    tag = "Card",
    security(("bearer_auth" = [])),
    params(("card_number" = String, Path, description = "Card number")),
    responses(
        (status = 200, description = "Card details", body = ApiResponse<CardResponse>),
        (status = 400, description = "Malformed card number"),
        (status = 404, description = "Card not found"),
        (status = 403, description = "Missing or invalid token")
    )
)]
pub async fn get_card(
    Extension(service): Extension<DynCardQueryService>,
    Extension(user_id): Extension<i32>,
    Path(card_number): Path<String>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_number(user_id, &card_number).await?;
    Ok(Json(response))
}

#[utoipa::path(
    post,
    path = "/api/cards",
    tag = "Card",
    security(("bearer_auth" = [])),
    request_body = CreateCardRequest,
    responses(
        (status = 201, description = "Card opened", body = ApiResponse<CardResponse>),
        (status = 400, description = "Validation error"),
        (status = 403, description = "Missing or invalid token")
    )
)]
pub async fn create_card(
    Extension(service): Extension<DynCardCommandService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateCardRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.create(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

pub fn card_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/cards", get(get_cards).post(create_card))
        .route("/api/cards/{card_number}", get(get_card))
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(app_state.di_container.card_query_service.clone()))
        .layer(Extension(
            app_state.di_container.card_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
