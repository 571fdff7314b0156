use crate::errors::{error::ErrorResponse, repository::RepositoryError, service::ServiceError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::{error, info, warn};

#[derive(Debug)]
pub struct AppErrorHttp(pub ServiceError);

impl IntoResponse for AppErrorHttp {
    fn into_response(self) -> Response {
        let (status, msg) = match self.0 {
            ServiceError::Forbidden(msg) => {
                warn!("🔐 Forbidden: {msg}");
                // Blunt refusal, no ownership detail leaks to the caller.
                (StatusCode::FORBIDDEN, "Forbidden".to_string())
            }
            ServiceError::InvalidCredentials => {
                warn!("🔐 Invalid credentials attempt");
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            ServiceError::Validation(errors) => {
                warn!("📝 Validation failed: {errors:?}");
                (StatusCode::BAD_REQUEST, errors.join("; "))
            }
            ServiceError::InsufficientBalance => {
                warn!("💸 Insufficient balance");
                (StatusCode::BAD_REQUEST, "insufficient balance".to_string())
            }
            ServiceError::AlreadyExists(msg) => {
                warn!("📦 Resource already exists: {msg}");
                (StatusCode::CONFLICT, msg)
            }
            ServiceError::NotFound(msg) => {
                info!("🔍 Not found: {msg}");
                (StatusCode::NOT_FOUND, msg)
            }
            ServiceError::TokenExpired => {
                warn!("⏰ Token expired");
                (StatusCode::FORBIDDEN, "Token has expired".to_string())
            }
            ServiceError::Jwt(err) => {
                warn!("🎫 JWT error: {err}");
                (StatusCode::FORBIDDEN, "Invalid token".to_string())
            }
            ServiceError::Repo(repo_err) => match repo_err {
                RepositoryError::NotFound => {
                    info!("🔍 Resource not found");
                    (StatusCode::NOT_FOUND, "Not found".to_string())
                }
                RepositoryError::AlreadyExists(msg) => {
                    warn!("📦 Resource already exists: {msg}");
                    (StatusCode::CONFLICT, msg)
                }
                RepositoryError::InsufficientBalance => {
                    warn!("💸 Insufficient balance");
                    (StatusCode::BAD_REQUEST, "insufficient balance".to_string())
                }
                RepositoryError::ForeignKey(msg) => {
                    warn!("🔗 Foreign key violation: {msg}");
                    (
                        StatusCode::BAD_REQUEST,
                        format!("Foreign key violation: {msg}"),
                    )
                }
                RepositoryError::Sqlx(err) => {
                    error!("💾 Database error: {err}");
                    (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        "Database error".to_string(),
                    )
                }
                RepositoryError::Custom(msg) => {
                    error!("⚙️ Repository error: {msg}");
                    (StatusCode::INTERNAL_SERVER_ERROR, msg)
                }
            },
            ServiceError::Bcrypt(err) => {
                error!("🔒 Bcrypt error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal authentication error".to_string(),
                )
            }
            ServiceError::Unavailable(msg) => {
                error!("🔥 Service unavailable: {msg}");
                (
                    StatusCode::SERVICE_UNAVAILABLE,
                    "Service unavailable".to_string(),
                )
            }
            ServiceError::InternalServerError(msg) => {
                error!("🔥 Internal server error: {msg}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            ServiceError::Custom(msg) => {
                error!("⚙️ Custom service error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg)
            }
        };

        let body = Json(ErrorResponse {
            status: "error".to_string(),
            message: msg,
        });

        (status, body).into_response()
    }
}

impl From<ServiceError> for AppErrorHttp {
    fn from(error: ServiceError) -> Self {
        AppErrorHttp(error)
    }
}

impl From<RepositoryError> for AppErrorHttp {
    fn from(error: RepositoryError) -> Self {
        AppErrorHttp(ServiceError::Repo(error))
    }
}
