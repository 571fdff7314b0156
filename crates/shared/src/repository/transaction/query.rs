use crate::{
    abstract_trait::transaction::repository::TransactionQueryRepositoryTrait,
    config::ConnectionPool, errors::RepositoryError, model::transaction::TransactionModel,
};
use async_trait::async_trait;
use tracing::error;

pub struct TransactionQueryRepository {
    db: ConnectionPool,
}

impl TransactionQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionQueryRepositoryTrait for TransactionQueryRepository {
    async fn find_all_by_card(
        &self,
        card_number: &str,
    ) -> Result<Vec<TransactionModel>, RepositoryError> {
        let transactions = sqlx::query_as::<_, TransactionModel>(
            r#"
            SELECT transaction_id, transaction_no, card_from, card_to,
                   amount, transaction_time, created_at
            FROM transactions
            WHERE card_from = $1 OR card_to = $1
            ORDER BY transaction_time DESC, transaction_id DESC
            "#,
        )
        .bind(card_number)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch transactions: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(transactions)
    }
}
