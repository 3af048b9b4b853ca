use crate::{errors::RepositoryError, model::card::CardModel};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryRepository = Arc<dyn CardQueryRepositoryTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryRepositoryTrait {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError>;
    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError>;
}
