use crate::{
    abstract_trait::{
        card::repository::DynCardQueryRepository,
        transaction::{repository::DynTransactionQueryRepository, service::TransactionQueryServiceTrait},
    },
    domain::responses::{ApiResponse, TransactionResponse},
    errors::ServiceError,
    utils::check_card_emitter,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct TransactionQueryService {
    card_query: DynCardQueryRepository,
    query: DynTransactionQueryRepository,
}

pub struct TransactionQueryServiceDeps {
    pub card_query: DynCardQueryRepository,
    pub query: DynTransactionQueryRepository,
}

impl TransactionQueryService {
    pub fn new(deps: TransactionQueryServiceDeps) -> Self {
        let TransactionQueryServiceDeps { card_query, query } = deps;

        Self { card_query, query }
    }
}

#[async_trait]
impl TransactionQueryServiceTrait for TransactionQueryService {
    async fn find_by_card(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<ApiResponse<Vec<TransactionResponse>>, ServiceError> {
        if !check_card_emitter(card_number) {
            warn!("📝 Transaction history requested with malformed card number");
            return Err(ServiceError::Validation(vec![
                "card: card number was not emitted by this bank".to_string(),
            ]));
        }

        let card = self
            .card_query
            .find_by_number(card_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound("card not found".to_string()))?;

        if card.user_id != user_id {
            return Err(ServiceError::Forbidden(
                "card is not owned by the caller".to_string(),
            ));
        }

        let transactions = self.query.find_all_by_card(card_number).await?;

        info!(
            "✅ Found {} transactions for card of user {user_id}",
            transactions.len()
        );

        let data = transactions
            .into_iter()
            .map(|t| TransactionResponse::from_model(t, card_number))
            .collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "transactions".to_string(),
            data,
        })
    }
}
