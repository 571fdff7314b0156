use crate::{
    domain::responses::{ApiResponse, HealthResponse},
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynHealthService = Arc<dyn HealthServiceTrait + Send + Sync>;

#[async_trait]
pub trait HealthServiceTrait {
    async fn check(&self) -> Result<ApiResponse<HealthResponse>, ServiceError>;
}
