use crate::{
    abstract_trait::card::repository::CardCommandRepositoryTrait,
    config::ConnectionPool,
    errors::RepositoryError,
    model::card::{CardModel, NewCard},
};
use async_trait::async_trait;
use tracing::error;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn create(&self, new_card: &NewCard) -> Result<CardModel, RepositoryError> {
        let card = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards
                (user_id, card_number, card_name, card_type, currency,
                 balance, open_date, validity_years)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING
                card_id, user_id, card_number, card_name, card_type, currency,
                balance, open_date, validity_years, created_at, updated_at
            "#,
        )
        .bind(new_card.user_id)
        .bind(&new_card.card_number)
        .bind(&new_card.card_name)
        .bind(&new_card.card_type)
        .bind(&new_card.currency)
        .bind(new_card.balance)
        .bind(new_card.open_date)
        .bind(new_card.validity_years)
        .fetch_one(&self.db)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                RepositoryError::AlreadyExists("card number collision".to_string())
            }
            sqlx::Error::Database(db_err) if db_err.is_foreign_key_violation() => {
                RepositoryError::ForeignKey("card owner does not exist".to_string())
            }
            _ => {
                error!("❌ Failed to insert card: {e:?}");
                RepositoryError::Sqlx(e)
            }
        })?;

        Ok(card)
    }
}
