use crate::{config::ConnectionPool, di::DependenciesInject};
use anyhow::Result;

#[derive(Clone)]
pub struct AppState {
    pub di_container: DependenciesInject,
}

impl AppState {
    pub async fn new(pool: ConnectionPool) -> Result<Self> {
        let di_container = DependenciesInject::new(pool).await?;

        Ok(Self { di_container })
    }
}
