use crate::{
    domain::requests::transaction::CreateTransferRequest, errors::RepositoryError,
    model::transaction::TransactionModel,
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynTransactionQueryRepository = Arc<dyn TransactionQueryRepositoryTrait + Send + Sync>;
pub type DynTransactionCommandRepository = Arc<dyn TransactionCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait TransactionQueryRepositoryTrait {
    /// Ledger rows touching a card (either side), newest first.
    async fn find_all_by_card(
        &self,
        card_number: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError>;
}

#[async_trait]
pub trait TransactionCommandRepositoryTrait {
    /// Applies debit, credit and ledger insert as one atomic unit.
    /// Returns `RepositoryError::InsufficientBalance` when the guarded
    /// debit does not go through, `NotFound` when either card vanished.
    async fn transfer(
        &self,
        req: &CreateTransferRequest,
    ) -> Result<TransactionModel, RepositoryError>;
}
