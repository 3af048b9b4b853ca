use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandRepository = Arc<dyn CardCommandRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandRepositoryTrait {
    /// Insert when `card.card_id == 0`, otherwise update the record with that
    /// identity. Returns the persisted state.
    async fn save(&self, card: &CardModel) -> Result<CardModel, RepositoryError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError>;
}
