use crate::{
    abstract_trait::card::{
        repository::{DynCardCommandRepository, DynCardQueryRepository},
        service::CardCommandServiceTrait,
    },
    domain::{
        CardType, Currency,
        requests::card::CreateCardRequest,
        responses::{ApiResponse, CardResponse},
    },
    errors::{RepositoryError, ServiceError, validation_error_messages},
    model::card::NewCard,
    service::tariff::TariffStore,
    utils::generate_card_number,
};
use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use tracing::{error, info};
use validator::Validate;

const VALIDITY_YEARS: i32 = 3;
const NUMBER_GENERATION_ATTEMPTS: usize = 10;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
    tariff: Arc<TariffStore>,
}

pub struct CardCommandServiceDeps {
    pub query: DynCardQueryRepository,
    pub command: DynCardCommandRepository,
    pub tariff: Arc<TariffStore>,
}

impl CardCommandService {
    pub fn new(deps: CardCommandServiceDeps) -> Self {
        let CardCommandServiceDeps {
            query,
            command,
            tariff,
        } = deps;

        Self {
            query,
            command,
            tariff,
        }
    }

    async fn fresh_card_number(&self, card_type: CardType) -> Result<String, ServiceError> {
        for _ in 0..NUMBER_GENERATION_ATTEMPTS {
            let candidate = generate_card_number(card_type);
            if !self.query.exists_by_number(&candidate).await? {
                return Ok(candidate);
            }
        }

        error!("⚙️ Could not find a free card number for {card_type:?}");
        // Expected business outcome, not a fault: the caller gets a 400.
        Err(ServiceError::Validation(vec![
            "internal: could not generate a unique card number".to_string(),
        ]))
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(
        &self,
        user_id: i32,
        req: &CreateCardRequest,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🆕 Opening card for user {user_id}: {req:?}");

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_error_messages(&errors)));
        }

        let card_type = CardType::from_code(req.card_type).ok_or_else(|| {
            ServiceError::Validation(vec!["type: card type is out of the enumerated set".into()])
        })?;
        let currency = Currency::from_code(req.currency).ok_or_else(|| {
            ServiceError::Validation(vec!["currency: currency is out of the enumerated set".into()])
        })?;

        let card_number = self.fresh_card_number(card_type).await?;

        let tariff = self.tariff.current();
        let bonus = tariff.convert_from_rur(tariff.open_bonus_rur, currency);

        let new_card = NewCard {
            user_id,
            card_number,
            card_name: req.card_name.clone(),
            card_type: card_type.as_str().to_string(),
            currency: currency.as_str().to_string(),
            balance: bonus,
            open_date: Utc::now().naive_utc(),
            validity_years: VALIDITY_YEARS,
        };

        let card = match self.command.create(&new_card).await {
            Ok(card) => card,
            Err(RepositoryError::AlreadyExists(msg)) => {
                error!("⚙️ Card number collision on insert: {msg}");
                return Err(ServiceError::Validation(vec![format!("internal: {msg}")]));
            }
            Err(e) => return Err(ServiceError::Repo(e)),
        };

        info!("✅ Card {} opened for user {user_id}", card.card_id);

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "card opened".to_string(),
            data: CardResponse::from(card),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::card::repository::{CardCommandRepositoryTrait, CardQueryRepositoryTrait},
        model::card::CardModel,
        utils::check_card_emitter,
    };
    use regex::Regex;
    use std::sync::Mutex;

    #[derive(Default)]
    struct InMemoryCards {
        cards: Mutex<Vec<CardModel>>,
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for InMemoryCards {
        async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .filter(|c| c.user_id == user_id)
                .cloned()
                .collect())
        }

        async fn find_by_number(
            &self,
            number: &str,
        ) -> Result<Option<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.card_number == number)
                .cloned())
        }

        async fn find_by_number_for_user(
            &self,
            user_id: i32,
            number: &str,
        ) -> Result<Option<CardModel>, RepositoryError> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.card_number == number && c.user_id == user_id)
                .cloned())
        }

        async fn exists_by_number(&self, number: &str) -> Result<bool, RepositoryError> {
            Ok(self
                .cards
                .lock()
                .unwrap()
                .iter()
                .any(|c| c.card_number == number))
        }
    }

    #[async_trait]
    impl CardCommandRepositoryTrait for InMemoryCards {
        async fn create(&self, new_card: &NewCard) -> Result<CardModel, RepositoryError> {
            let mut cards = self.cards.lock().unwrap();
            let card = CardModel {
                card_id: cards.len() as i32 + 1,
                user_id: new_card.user_id,
                card_number: new_card.card_number.clone(),
                card_name: new_card.card_name.clone(),
                card_type: new_card.card_type.clone(),
                currency: new_card.currency.clone(),
                balance: new_card.balance,
                open_date: new_card.open_date,
                validity_years: new_card.validity_years,
                created_at: None,
                updated_at: None,
            };
            cards.push(card.clone());
            Ok(card)
        }
    }

    fn service() -> (Arc<InMemoryCards>, CardCommandService) {
        let repo = Arc::new(InMemoryCards::default());
        let service = CardCommandService::new(CardCommandServiceDeps {
            query: repo.clone(),
            command: repo.clone(),
            tariff: Arc::new(TariffStore::new()),
        });
        (repo, service)
    }

    #[tokio::test]
    async fn opened_card_passes_the_emitter_check_and_carries_the_bonus() {
        let (_, service) = service();
        let req = CreateCardRequest {
            card_name: "my card".to_string(),
            card_type: CardType::Maestro.code(),
            currency: Currency::Rur.code(),
        };

        let response = service.create(1, &req).await.unwrap();
        let card = response.data;

        assert!(check_card_emitter(&card.number));
        assert!(card.number.starts_with(CardType::Maestro.bin()));
        assert_eq!(card.balance, 1000);
        assert!(Regex::new(r"^\d{2}/\d{2}$").unwrap().is_match(&card.exp));
    }

    #[tokio::test]
    async fn foreign_currency_bonus_is_converted() {
        let (_, service) = service();
        let req = CreateCardRequest {
            card_name: "travel".to_string(),
            card_type: CardType::Visa.code(),
            currency: Currency::Usd.code(),
        };

        let response = service.create(1, &req).await.unwrap();

        assert_eq!(response.data.balance, 15);
    }

    #[tokio::test]
    async fn invalid_dto_reports_every_bad_field_and_persists_nothing() {
        let (repo, service) = service();
        let req = CreateCardRequest {
            card_name: String::new(),
            card_type: 5,
            currency: 4,
        };

        let err = service.create(1, &req).await.unwrap_err();

        match err {
            ServiceError::Validation(messages) => assert_eq!(messages.len(), 3),
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(repo.cards.lock().unwrap().is_empty());
    }
}
