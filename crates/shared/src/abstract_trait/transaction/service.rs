use crate::{
    domain::{
        requests::transaction::CreateTransferRequest,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::ServiceError,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryService = Arc<dyn TransactionQueryServiceTrait + Send + Sync>;
pub type DynTransactionCommandService = Arc<dyn TransactionCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryServiceTrait {
    async fn find_by_card(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError>;
}

#[async_trait]
pub trait TransactionCommandServiceTrait {
    async fn transfer(
        &self,
        user_id: i32,
        req: &CreateTransferRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError>;
}
