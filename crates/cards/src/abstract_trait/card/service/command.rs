use crate::{
    domain::{
        requests::{CreateCardRequest, UpdateCardRequest},
        responses::ApiResponse,
    },
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

pub type DynCardCommandService = Arc<dyn CardCommandServiceTrait + Send + Sync>;

#[async_trait]
pub trait CardCommandServiceTrait {
    async fn create(&self, req: &CreateCardRequest) -> Result<ApiResponse<()>, ServiceError>;
    async fn update(&self, req: &UpdateCardRequest) -> Result<ApiResponse<bool>, ServiceError>;
    async fn delete(&self, mobile_number: &str) -> Result<ApiResponse<bool>, ServiceError>;
}
