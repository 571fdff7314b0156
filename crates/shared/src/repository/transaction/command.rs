use crate::{
    abstract_trait::transaction::repository::TransactionCommandRepositoryTrait,
    config::ConnectionPool, domain::requests::transaction::CreateTransferRequest,
    errors::RepositoryError, model::transaction::TransactionModel,
};
use async_trait::async_trait;
use tracing::error;
use uuid::Uuid;

pub struct TransactionCommandRepository {
    db: ConnectionPool,
}

impl TransactionCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl TransactionCommandRepositoryTrait for TransactionCommandRepository {
    async fn transfer(
        &self,
        req: &CreateTransferRequest,
    ) -> Result<TransactionModel, RepositoryError> {
        let mut tx = self.db.begin().await.map_err(|e| {
            error!("❌ Failed to begin transfer transaction: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        // Lock both card rows up front, in card-number order so two
        // opposite transfers cannot deadlock on each other.
        let locked: Vec<(String,)> = sqlx::query_as(
            r#"
            SELECT card_number FROM cards
            WHERE card_number IN ($1, $2)
            ORDER BY card_number
            FOR UPDATE
            "#,
        )
        .bind(&req.card_from)
        .bind(&req.card_to)
        .fetch_all(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to lock cards for transfer: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if locked.len() != 2 {
            return Err(RepositoryError::NotFound);
        }

        // Guarded debit: the WHERE clause keeps a racing transfer from
        // overdrawing even though the rows are already locked.
        let debited = sqlx::query(
            r#"
            UPDATE cards
            SET balance = balance - $1, updated_at = NOW()
            WHERE card_number = $2 AND balance >= $1
            "#,
        )
        .bind(req.amount)
        .bind(&req.card_from)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to debit source card: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        if debited.rows_affected() == 0 {
            return Err(RepositoryError::InsufficientBalance);
        }

        sqlx::query(
            r#"
            UPDATE cards
            SET balance = balance + $1, updated_at = NOW()
            WHERE card_number = $2
            "#,
        )
        .bind(req.amount)
        .bind(&req.card_to)
        .execute(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to credit destination card: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        let transaction = sqlx::query_as::<_, TransactionModel>(
            r#"
            INSERT INTO transactions
                (transaction_no, card_from, card_to, amount, transaction_time)
            VALUES ($1, $2, $3, $4, NOW())
            RETURNING transaction_id, transaction_no, card_from, card_to,
                      amount, transaction_time, created_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(&req.card_from)
        .bind(&req.card_to)
        .bind(req.amount)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert ledger row: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        tx.commit().await.map_err(|e| {
            error!("❌ Failed to commit transfer: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(transaction)
    }
}
