pub const CREDIT_CARD: &str = "Credit Card";

pub const NEW_CARD_LIMIT: i64 = 100_000;
