use crate::{
    abstract_trait::{
        card::repository::DynCardQueryRepository,
        transaction::{
            repository::DynTransactionCommandRepository, service::TransactionCommandServiceTrait,
        },
    },
    domain::{
        requests::transaction::CreateTransferRequest,
        responses::{ApiResponse, TransactionResponse},
    },
    errors::{RepositoryError, ServiceError, validation_error_messages},
    utils::check_card_emitter,
};
use async_trait::async_trait;
use tracing::{info, warn};
use validator::Validate;

pub struct TransactionCommandService {
    card_query: DynCardQueryRepository,
    command: DynTransactionCommandRepository,
}

pub struct TransactionCommandServiceDeps {
    pub card_query: DynCardQueryRepository,
    pub command: DynTransactionCommandRepository,
}

impl TransactionCommandService {
    pub fn new(deps: TransactionCommandServiceDeps) -> Self {
        let TransactionCommandServiceDeps {
            card_query,
            command,
        } = deps;

        Self {
            card_query,
            command,
        }
    }
}

#[async_trait]
impl TransactionCommandServiceTrait for TransactionCommandService {
    async fn transfer(
        &self,
        user_id: i32,
        req: &CreateTransferRequest,
    ) -> Result<ApiResponse<TransactionResponse>, ServiceError> {
        info!(
            "💸 Transfer requested by user {user_id}: {} minor units",
            req.amount
        );

        if let Err(errors) = req.validate() {
            return Err(ServiceError::Validation(validation_error_messages(&errors)));
        }

        if !check_card_emitter(&req.card_from) || !check_card_emitter(&req.card_to) {
            return Err(ServiceError::Validation(vec![
                "card number was not emitted by this bank".to_string(),
            ]));
        }

        if req.card_from == req.card_to {
            return Err(ServiceError::Validation(vec![
                "to: source and destination cards must differ".to_string(),
            ]));
        }

        // Ownership gate before any side effect.
        let source = self
            .card_query
            .find_by_number_for_user(user_id, &req.card_from)
            .await?
            .ok_or_else(|| {
                warn!("🔐 Transfer from a card the caller does not own");
                ServiceError::Forbidden("source card is not owned by the caller".to_string())
            })?;

        if self
            .card_query
            .find_by_number(&req.card_to)
            .await?
            .is_none()
        {
            return Err(ServiceError::NotFound(
                "destination card not found".to_string(),
            ));
        }

        // Friendly precheck; the repository re-checks under the row lock.
        if source.balance < req.amount {
            warn!(
                "💸 Insufficient balance: requested {}, available {}",
                req.amount, source.balance
            );
            return Err(ServiceError::InsufficientBalance);
        }

        let transaction = self.command.transfer(req).await.map_err(|e| match e {
            RepositoryError::InsufficientBalance => ServiceError::InsufficientBalance,
            RepositoryError::NotFound => ServiceError::NotFound("card not found".to_string()),
            other => ServiceError::Repo(other),
        })?;

        info!(
            "✅ Transfer {} completed: {} minor units",
            transaction.transaction_no, transaction.amount
        );

        Ok(ApiResponse {
            status: "success".to_string(),
            message: "transfer completed".to_string(),
            data: TransactionResponse::from_model(transaction, &req.card_from),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        abstract_trait::{
            card::repository::CardQueryRepositoryTrait,
            transaction::repository::TransactionCommandRepositoryTrait,
        },
        domain::{CardType, Currency},
        model::{card::CardModel, transaction::TransactionModel},
        utils::generate_card_number,
    };
    use chrono::Utc;
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    #[derive(Default)]
    struct InMemoryBank {
        cards: Mutex<Vec<CardModel>>,
        ledger: Mutex<Vec<TransactionModel>>,
    }

    impl InMemoryBank {
        fn add_card(&self, user_id: i32, balance: i64) -> String {
            let number = generate_card_number(CardType::Visa);
            let mut cards = self.cards.lock().unwrap();
            let card_id = cards.len() as i32 + 1;
            cards.push(CardModel {
                card_id,
                user_id,
                card_number: number.clone(),
                card_name: "my card".to_string(),
                card_type: CardType::Visa.as_str().to_string(),
                currency: Currency::Rur.as_str().to_string(),
                balance,
                open_date: Utc::now().naive_utc(),
                validity_years: 3,
                created_at: None,
                updated_at: None,
            });
            number
        }

        fn balance_of(&self, number: &str) -> i64 {
            self.cards
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.card_number == number)
                .map(|c| c.balance)
                .unwrap()
        }
    }

    #[async_trait]
    impl CardQueryRepositoryTrait for InMemoryBank {
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
    impl TransactionCommandRepositoryTrait for InMemoryBank {
        async fn transfer(
            &self,
            req: &CreateTransferRequest,
        ) -> Result<TransactionModel, RepositoryError> {
            let mut cards = self.cards.lock().unwrap();

            let source_balance = cards
                .iter()
                .find(|c| c.card_number == req.card_from)
                .map(|c| c.balance)
                .ok_or(RepositoryError::NotFound)?;
            if source_balance < req.amount {
                return Err(RepositoryError::InsufficientBalance);
            }
            if !cards.iter().any(|c| c.card_number == req.card_to) {
                return Err(RepositoryError::NotFound);
            }

            for card in cards.iter_mut() {
                if card.card_number == req.card_from {
                    card.balance -= req.amount;
                }
                if card.card_number == req.card_to {
                    card.balance += req.amount;
                }
            }

            let mut ledger = self.ledger.lock().unwrap();
            let transaction = TransactionModel {
                transaction_id: ledger.len() as i32 + 1,
                transaction_no: Uuid::new_v4(),
                card_from: req.card_from.clone(),
                card_to: req.card_to.clone(),
                amount: req.amount,
                transaction_time: Utc::now().naive_utc(),
                created_at: None,
            };
            ledger.push(transaction.clone());

            Ok(transaction)
        }
    }

    fn service(bank: &Arc<InMemoryBank>) -> TransactionCommandService {
        TransactionCommandService::new(TransactionCommandServiceDeps {
            card_query: bank.clone(),
            command: bank.clone(),
        })
    }

    fn request(from: &str, to: &str, amount: i64) -> CreateTransferRequest {
        CreateTransferRequest {
            card_from: from.to_string(),
            card_to: to.to_string(),
            amount,
        }
    }

    #[tokio::test]
    async fn successful_transfer_moves_exactly_the_amount() {
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 1000);
        let to = bank.add_card(2, 50);

        let response = service(&bank)
            .transfer(1, &request(&from, &to, 300))
            .await
            .unwrap();

        assert_eq!(bank.balance_of(&from), 700);
        assert_eq!(bank.balance_of(&to), 350);
        assert_eq!(bank.ledger.lock().unwrap().len(), 1);
        assert_eq!(response.data.sum, 300);
        assert!(!response.data.is_credit);
    }

    #[tokio::test]
    async fn foreign_card_transfer_has_no_side_effects() {
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 1000);
        let to = bank.add_card(2, 50);

        let err = service(&bank)
            .transfer(3, &request(&from, &to, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Forbidden(_)));
        assert_eq!(bank.balance_of(&from), 1000);
        assert_eq!(bank.balance_of(&to), 50);
        assert!(bank.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn insufficient_balance_is_a_refusal_not_a_fault() {
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 100);
        let to = bank.add_card(2, 0);

        let err = service(&bank)
            .transfer(1, &request(&from, &to, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::InsufficientBalance));
        assert_eq!(bank.balance_of(&from), 100);
        assert!(bank.ledger.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn unknown_destination_is_refused() {
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 1000);
        let ghost = generate_card_number(CardType::Mir);

        let err = service(&bank)
            .transfer(1, &request(&from, &ghost, 300))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::NotFound(_)));
        assert_eq!(bank.balance_of(&from), 1000);
    }

    #[tokio::test]
    async fn identical_payload_twice_creates_two_ledger_rows() {
        // Documents the accepted idempotence gap: no dedup key exists.
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 1000);
        let to = bank.add_card(2, 0);
        let req = request(&from, &to, 100);
        let svc = service(&bank);

        svc.transfer(1, &req).await.unwrap();
        svc.transfer(1, &req).await.unwrap();

        assert_eq!(bank.balance_of(&from), 800);
        assert_eq!(bank.balance_of(&to), 200);
        assert_eq!(bank.ledger.lock().unwrap().len(), 2);
    }

    #[tokio::test]
    async fn same_card_transfer_is_refused() {
        let bank = Arc::new(InMemoryBank::default());
        let from = bank.add_card(1, 1000);

        let err = service(&bank)
            .transfer(1, &request(&from, &from, 100))
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
        assert_eq!(bank.balance_of(&from), 1000);
    }
}
