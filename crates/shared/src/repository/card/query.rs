use crate::{
    abstract_trait::card::repository::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use async_trait::async_trait;
use tracing::error;

const CARD_COLUMNS: &str = r#"
    card_id, user_id, card_number, card_name, card_type, currency,
    balance, open_date, validity_years, created_at, updated_at
"#;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<CardModel>, RepositoryError> {
        let cards = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE user_id = $1 ORDER BY card_id"
        ))
        .bind(user_id)
        .fetch_all(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch cards for user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(cards)
    }

    async fn find_by_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let card = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_number = $1"
        ))
        .bind(card_number)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_by_number_for_user(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let card = sqlx::query_as::<_, CardModel>(&format!(
            "SELECT {CARD_COLUMNS} FROM cards WHERE card_number = $1 AND user_id = $2"
        ))
        .bind(card_number)
        .bind(user_id)
        .fetch_optional(&self.db)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card for user {user_id}: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn exists_by_number(&self, card_number: &str) -> Result<bool, RepositoryError> {
        let exists: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM cards WHERE card_number = $1)")
                .bind(card_number)
                .fetch_one(&self.db)
                .await
                .map_err(|e| {
                    error!("❌ Failed to check card existence: {e:?}");
                    RepositoryError::Sqlx(e)
                })?;

        Ok(exists.0)
    }
}
