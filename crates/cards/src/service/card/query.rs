use crate::{
    abstract_trait::card::{
        repository::query::DynCardQueryRepository, service::query::CardQueryServiceTrait,
    },
    domain::responses::{ApiResponse, CardResponse},
    errors::ServiceError,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};

pub struct CardQueryService {
    query: DynCardQueryRepository,
}

impl CardQueryService {
    pub async fn new(query: DynCardQueryRepository) -> Self {
        Self { query }
    }
}

#[async_trait]
impl CardQueryServiceTrait for CardQueryService {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<ApiResponse<CardResponse>, ServiceError> {
        info!("🔍 Fetching card for mobileNumber={mobile_number}");

        let card = self
            .query
            .find_by_mobile_number(mobile_number)
            .await
            .map_err(|e| {
                error!("❌ Failed to fetch card for mobileNumber {mobile_number}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| ServiceError::not_found("Card", "mobileNumber", mobile_number))?;

        let response = CardResponse::from(card);

        info!("✅ Found card with card_id={}", response.id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card fetched successfully!".into(),
            data: response,
        })
    }
}
