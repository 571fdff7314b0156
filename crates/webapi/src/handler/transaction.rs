use crate::{
    middleware::{jwt, validate::SimpleValidatedJson},
    state::AppState,
};
use axum::{
    Extension, Json,
    extract::Query,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::get,
};
use shared::{
    abstract_trait::transaction::service::{
        DynTransactionCommandService, DynTransactionQueryService,
    },
    domain::{
        requests::transaction::{CreateTransferRequest, FindTransactionsByCard},
        responses::{ApiResponse, TransactionResponse},
    },
    errors::AppErrorHttp,
};
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    post,
    path = "/api/transactions",
    tag = "Transaction",
    security(("bearer_auth" = [])),
    request_body = CreateTransferRequest,
    responses(
        (status = 201, description = "Transfer completed", body = ApiResponse<TransactionResponse>),
        (status = 400, description = "Validation error or insufficient balance"),
        (status = 403, description = "Source card not owned by the caller"),
        (status = 404, description = "Destination card not found")
    )
)]
pub async fn create_transaction(
    Extension(service): Extension<DynTransactionCommandService>,
    Extension(user_id): Extension<i32>,
    SimpleValidatedJson(body): SimpleValidatedJson<CreateTransferRequest>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.transfer(user_id, &body).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/transactions",
    tag = "Transaction",
    security(("bearer_auth" = [])),
    params(FindTransactionsByCard),
    responses(
        (status = 200, description = "Transaction history of a card", body = ApiResponse<Vec<TransactionResponse>>),
        (status = 400, description = "Malformed card number"),
        (status = 403, description = "Card not owned by the caller"),
        (status = 404, description = "Card not found")
    )
)]
pub async fn get_transactions(
    Extension(service): Extension<DynTransactionQueryService>,
    Extension(user_id): Extension<i32>,
    Query(params): Query<FindTransactionsByCard>,
) -> Result<impl IntoResponse, AppErrorHttp> {
    let response = service.find_by_card(user_id, &params.card).await?;
    Ok(Json(response))
}

pub fn transaction_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route(
            "/api/transactions",
            get(get_transactions).post(create_transaction),
        )
        .route_layer(middleware::from_fn(jwt::auth))
        .layer(Extension(
            app_state.di_container.transaction_query_service.clone(),
        ))
        .layer(Extension(
            app_state.di_container.transaction_command_service.clone(),
        ))
        .layer(Extension(app_state.jwt_config.clone()))
}
