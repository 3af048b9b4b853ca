use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateCardRequest {
    #[validate(length(min = 1, message = "Mobile number is required"))]
    pub mobile_number: String,
}

/// Full projection of a card account. `card_number` is the lookup key; the
/// four remaining fields overwrite the stored record verbatim.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpdateCardRequest {
    #[validate(length(min = 1, message = "Card number is required"))]
    pub card_number: String,

    #[validate(length(min = 1, message = "Card type is required"))]
    pub card_type: String,

    pub total_limit: i64,

    pub amount_used: i64,

    pub available_amount: i64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn empty_mobile_number_is_rejected() {
        let req = CreateCardRequest {
            mobile_number: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn empty_card_number_is_rejected_on_update() {
        let req = UpdateCardRequest {
            card_number: String::new(),
            card_type: "Credit Card".into(),
            total_limit: 100_000,
            amount_used: 0,
            available_amount: 100_000,
        };
        assert!(req.validate().is_err());
    }
}
