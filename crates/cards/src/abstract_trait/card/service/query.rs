use crate::{
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardQueryService = Arc<dyn CardQueryServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardQueryServiceTrait {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<ApiResponse<CardResponse>, ServiceError>;
}
