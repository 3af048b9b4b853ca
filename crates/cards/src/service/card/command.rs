use crate::{
    abstract_trait::card::{
        number::DynCardNumberGenerator,
        repository::{command::DynCardCommandRepository, query::DynCardQueryRepository},
        service::command::CardCommandServiceTrait,
    },
    domain::{
        requests::{CreateCardRequest, UpdateCardRequest},
        responses::ApiResponse,
    },
    errors::{ServiceError, format_validation_errors},
    model::card::CardModel,
    utils::{CREDIT_CARD, NEW_CARD_LIMIT, mask_card_number},
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::{error, info};
use validator::Validate;

pub struct CardCommandService {
    query: DynCardQueryRepository,
    command: DynCardCommandRepository,
    card_number: DynCardNumberGenerator,
}

impl CardCommandService {
    pub async fn new(
        query: DynCardQueryRepository,
        command: DynCardCommandRepository,
        card_number: DynCardNumberGenerator,
    ) -> Self {
        Self {
            query,
            command,
            card_number,
        }
    }

    /// Fresh account for a mobile number: generated card number, default
    /// limit, nothing spent yet. `card_id` stays 0 until the store assigns one.
    fn new_card(&self, mobile_number: &str, card_number: String) -> CardModel {
        CardModel {
            card_id: 0,
            mobile_number: mobile_number.to_string(),
            card_number,
            card_type: CREDIT_CARD.to_string(),
            total_limit: NEW_CARD_LIMIT,
            amount_used: 0,
            available_amount: NEW_CARD_LIMIT,
            created_at: None,
            updated_at: None,
        }
    }
}

#[async_trait]
impl CardCommandServiceTrait for CardCommandService {
    async fn create(&self, req: &CreateCardRequest) -> Result<ApiResponse<()>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(str::to_string).collect(),
            ));
        }

        info!("🆕 Creating card for mobileNumber={}", req.mobile_number);

        let existing = self
            .query
            .find_by_mobile_number(&req.mobile_number)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to look up card for mobileNumber {}: {e:?}",
                    req.mobile_number,
                );
                ServiceError::Repo(e)
            })?;

        if existing.is_some() {
            return Err(ServiceError::AlreadyExists(req.mobile_number.clone()));
        }

        let card_number = self.card_number.generate().map_err(|e| {
            error!("💥 Failed to generate card number: {e:?}");
            ServiceError::Internal("Failed to generate card number".into())
        })?;

        let new_card = self.new_card(&req.mobile_number, card_number);

        let card = self.command.save(&new_card).await.map_err(|e| {
            error!(
                "💥 Failed to create card for mobileNumber {}: {e:?}",
                req.mobile_number,
            );
            ServiceError::Repo(e)
        })?;

        info!(
            "✅ Card created successfully with card_id={} number={}",
            card.card_id,
            mask_card_number(&card.card_number),
        );

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card created successfully!".into(),
            data: (),
        })
    }

    async fn update(&self, req: &UpdateCardRequest) -> Result<ApiResponse<bool>, ServiceError> {
        if let Err(validation_errors) = req.validate() {
            let error_msg = format_validation_errors(&validation_errors);
            error!("Validation failed: {error_msg}");
            return Err(ServiceError::Validation(
                error_msg.lines().map(str::to_string).collect(),
            ));
        }

        info!(
            "🔄 Updating card number={}",
            mask_card_number(&req.card_number)
        );

        let mut card = self
            .query
            .find_by_card_number(&req.card_number)
            .await
            .map_err(|e| {
                error!(
                    "❌ Failed to look up card number {}: {e:?}",
                    mask_card_number(&req.card_number),
                );
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| ServiceError::not_found("Card", "CardNumber", &req.card_number))?;

        // Verbatim overwrite; used/available/total are not reconciled here.
        card.card_type = req.card_type.clone();
        card.total_limit = req.total_limit;
        card.amount_used = req.amount_used;
        card.available_amount = req.available_amount;

        let updated = self.command.save(&card).await.map_err(|e| {
            error!("💥 Failed to update card id {}: {e:?}", card.card_id);
            ServiceError::Repo(e)
        })?;

        info!("✅ Card updated successfully with card_id={}", updated.card_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card updated successfully!".into(),
            data: true,
        })
    }

    async fn delete(&self, mobile_number: &str) -> Result<ApiResponse<bool>, ServiceError> {
        info!("🗑️ Deleting card for mobileNumber={mobile_number}");

        let card = self
            .query
            .find_by_mobile_number(mobile_number)
            .await
            .map_err(|e| {
                error!("❌ Failed to look up card for mobileNumber {mobile_number}: {e:?}");
                ServiceError::Repo(e)
            })?
            .ok_or_else(|| ServiceError::not_found("Card", "mobileNumber", mobile_number))?;

        self.command.delete_by_id(card.card_id).await.map_err(|e| {
            error!("💥 Failed to delete card id {}: {e:?}", card.card_id);
            ServiceError::Repo(e)
        })?;

        info!("✅ Card deleted successfully with card_id={}", card.card_id);

        Ok(ApiResponse {
            status: "success".into(),
            message: "✅ Card deleted successfully!".into(),
            data: true,
        })
    }
}
