use anyhow::Result;
use std::sync::Arc;

pub type DynCardNumberGenerator = Arc<dyn CardNumberGeneratorTrait + Send + Sync>;

/// Source of new card numbers. Injected into the command service so tests can
/// supply deterministic sequences and production can swap strategies.
pub trait CardNumberGeneratorTrait {
    fn generate(&self) -> Result<String>;
}
