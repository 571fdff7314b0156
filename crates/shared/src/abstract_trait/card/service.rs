use crate::{
    domain::{
        requests::card::CreateCardRequest,
        responses::{ApiResponse, CardResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;
pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_all(&self, user_id: i32)
    -> Result<ApiResponse<Vec<CardResponse>>, ServiceError>;
    async fn find_by_number(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}

#[async_trait]
pub trait CardCommandServiceTrait {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}
