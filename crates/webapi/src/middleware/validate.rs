use axum::{
    Json,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;
use shared::errors::{AppErrorHttp, ServiceError, validation_error_messages};
use validator::Validate;

/// JSON extractor that rejects malformed bodies and DTOs failing their
/// declared validation rules with a 400 instead of axum's default 422.
pub struct SimpleValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for SimpleValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
{
    type Rejection = AppErrorHttp;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                AppErrorHttp(ServiceError::Validation(vec![rejection.body_text()]))
            })?;

        value.validate().map_err(|errors| {
            AppErrorHttp(ServiceError::Validation(validation_error_messages(&errors)))
        })?;

        Ok(Self(value))
    }
}
