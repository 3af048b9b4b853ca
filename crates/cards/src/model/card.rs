use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One customer card account. `card_id == 0` marks a record that has not been
/// persisted yet; the store assigns the real identifier on insert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct CardModel {
    pub card_id: i32,
    pub mobile_number: String,
    pub card_number: String,
    pub card_type: String,
    pub total_limit: i64,
    pub amount_used: i64,
    pub available_amount: i64,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}
