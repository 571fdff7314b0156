use axum::{
    Extension,
    extract::Request,
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use shared::{
    abstract_trait::jwt::DynJwtService,
    errors::{AppErrorHttp, ServiceError},
};

/// Bearer-token gate for the private routes. Verified user id is attached as
/// an `Extension<i32>` for the handlers downstream. Any failure, including a
/// missing header, is answered with a blunt 403.
pub async fn auth(
    Extension(jwt): Extension<DynJwtService>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppErrorHttp> {
    let token = req
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
        .ok_or_else(|| {
            AppErrorHttp(ServiceError::Forbidden("missing bearer token".to_string()))
        })?;

    let user_id = jwt.verify_token(&token)?;

    req.extensions_mut().insert(user_id);

    Ok(next.run(req).await)
}
