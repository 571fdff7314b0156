use crate::{
    abstract_trait::card::{repository::DynCardQueryRepository, service::CardQueryServiceTrait},
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
    utils::check_card_emitter,
};
use async_trait::async_trait;
use tracing::{info, warn};

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_all(
        &self,
        user_id: i32,
    ) -> Result<ApiResponse<Vec<CardResponse>>, ServiceError> {
        let cards = self.query.find_all_by_user(user_id).await?;

        info!("✅ Found {} cards for user {user_id}", cards.len());

        let data = cards.into_iter().map(CardResponse::from).collect();

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "cards".to_string(),
            data,
        })
    }

    async fn find_by_number(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        // Malformed numbers are refused before the store is touched.
        if !check_card_emitter(card_number) {
            warn!("📝 Card read with malformed number");
            return Err(ServiceError::Validation(vec![
                "number: card number was not emitted by this bank".to_string(),
            ]));
        }

        let card = self
            .query
            .find_by_number_for_user(user_id, card_number)
            .await?
            .ok_or_else(|| ServiceError::NotFound("card not found".to_string()))?;

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "card".to_string(),
            data: CardResponse::from(card),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::card::repository::CardQueryRepositoryTrait, errors::RepositoryError,
        model::card::CardModel,
    };
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    struct CountingRepo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for CountingRepo {
        async fn find_all_by_user(&self, _: i32) -> Result<Vec<CardModel>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![])
        }

        async fn find_by_number(&self, _: &str) -> Result<Option<CardModel>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn find_by_number_for_user(
            &self,
            _: i32,
            _: &str,
        ) -> Result<Option<CardModel>, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(None)
        }

        async fn exists_by_number(&self, _: &str) -> Result<bool, RepositoryError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(false)
        }
    }

    #[tokio::test]
    async fn malformed_number_is_refused_without_touching_the_repository() {
        let repo = Arc::new(CountingRepo {
            calls: AtomicUsize::new(0),
        });
        let service = CardQueryService::new(repo.clone());

        let err = service.find_by_number(1, "not-a-card").await.unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn unknown_but_well_formed_number_is_not_found() {
        let repo = Arc::new(CountingRepo {
            calls: AtomicUsize::new(0),
        });
        let service = CardQueryService::new(repo.clone());
        let number = crate::utils::generate_card_number(crate::domain::CardType::Visa);

        let err = service.find_by_number(1, &number).await.unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(repo.calls.load(Ordering::SeqCst), 1);
    }
}
