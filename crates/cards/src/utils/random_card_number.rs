use crate::abstract_trait::card::number::CardNumberGeneratorTrait;
use anyhow::{Result, anyhow};
use rand::{Rng, rng};
use regex::Regex;

/// 12-digit card number, first digit fixed at 1. Uniqueness against already
/// issued numbers is not checked here.
pub fn random_card_number() -> Result<String> {
    let mut rng = rng();

    let random_digits: String = (0..11)
        .map(|_| rng.random_range(0..10).to_string())
        .collect();

    let candidate = format!("1{random_digits}");

    let re = Regex::new(r"^\d{12}$")?;
    if re.is_match(&candidate) {
        Ok(candidate)
    } else {
        Err(anyhow!("Generated number is invalid"))
    }
}

pub struct RandomCardNumberGenerator;

impl CardNumberGeneratorTrait for RandomCardNumberGenerator {
    fn generate(&self) -> Result<String> {
        random_card_number()
    }
}
