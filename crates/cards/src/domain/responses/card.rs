use crate::model::card::CardModel;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CardResponse {
    pub id: i32,
    #[serde(rename = "mobile_number")]
    pub mobile_number: String,
    #[serde(rename = "card_number")]
    pub card_number: String,
    #[serde(rename = "card_type")]
    pub card_type: String,
    #[serde(rename = "total_limit")]
    pub total_limit: i64,
    #[serde(rename = "amount_used")]
    pub amount_used: i64,
    #[serde(rename = "available_amount")]
    pub available_amount: i64,
    #[serde(rename = "created_at")]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at")]
    pub updated_at: Option<String>,
}

// model to response
impl From<CardModel> for CardResponse {
    fn from(model: CardModel) -> Self {
        Self {
            id: model.card_id,
            mobile_number: model.mobile_number,
            card_number: model.card_number,
            card_type: model.card_type,
            total_limit: model.total_limit,
            amount_used: model.amount_used,
            available_amount: model.available_amount,
            created_at: model.created_at.map(|dt| dt.to_string()),
            updated_at: model.updated_at.map(|dt| dt.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn response_serializes_with_snake_case_fields() {
        let response = CardResponse {
            id: 1,
            mobile_number: "9876543210".into(),
            card_number: "100000000001".into(),
            card_type: "Credit Card".into(),
            total_limit: 100_000,
            amount_used: 0,
            available_amount: 100_000,
            created_at: None,
            updated_at: None,
        };

        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["mobile_number"], "9876543210");
        assert_eq!(value["card_type"], "Credit Card");
        assert_eq!(value["total_limit"], 100_000);
    }
}
