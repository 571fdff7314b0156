use crate::{
    errors::RepositoryError,
    model::card::{CardModel, NewCard},
};
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;
pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_all_by_user(&self, user_id: i32) -> Result<Vec<CardModel>, RepositoryError>;
    async fn find_by_number(&self, card_number: &str)
    -> Result<Option<CardModel>, RepositoryError>;
    async fn find_by_number_for_user(
        &self,
        user_id: i32,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError>;
    async fn exists_by_number(&self, card_number: &str) -> Result<bool, RepositoryError>;
}

#[async_trait]
pub trait CardCommandRepositoryTrait {
    async fn create(&self, new_card: &NewCard) -> Result<CardModel, RepositoryError>;
}
