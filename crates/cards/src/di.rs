use std::sync::Arc;

use crate::{
    abstract_trait::card::{
        number::DynCardNumberGenerator,
        repository::{DynCardCommandRepository, DynCardQueryRepository},
        service::{DynCardCommandService, DynCardQueryService},
    },
    config::ConnectionPool,
    repository::card::{CardCommandRepository, CardQueryRepository},
    service::card::{CardCommandService, CardQueryService},
    utils::RandomCardNumberGenerator,
};
use anyhow::Result;

#[derive(Clone)]
pub struct CardQueryDeps {
    pub query: DynCardQueryRepository,
    pub service: DynCardQueryService,
}

impl CardQueryDeps {
    pub async fn new(db: ConnectionPool) -> Self {
        let query = Arc::new(CardQueryRepository::new(db.clone())) as DynCardQueryRepository;
        let service = Arc::new(CardQueryService::new(query.clone()).await) as DynCardQueryService;
        Self { query, service }
    }
}

#[derive(Clone)]
pub struct CardCommandDeps {
    pub command: DynCardCommandRepository,
    pub service: DynCardCommandService,
}

impl CardCommandDeps {
    pub async fn new(
        db: ConnectionPool,
        query: DynCardQueryRepository,
        card_number: DynCardNumberGenerator,
    ) -> Self {
        let command = Arc::new(CardCommandRepository::new(db.clone())) as DynCardCommandRepository;
        let service = Arc::new(CardCommandService::new(query, command.clone(), card_number).await)
            as DynCardCommandService;
        Self { command, service }
    }
}

#[derive(Clone)]
pub struct DependenciesInject {
    pub card_query: CardQueryDeps,
    pub card_command: CardCommandDeps,
}

impl DependenciesInject {
    pub async fn new(db: ConnectionPool) -> Result<Self> {
        let card_number = Arc::new(RandomCardNumberGenerator) as DynCardNumberGenerator;

        let card_query = CardQueryDeps::new(db.clone()).await;
        let card_command =
            CardCommandDeps::new(db.clone(), card_query.query.clone(), card_number).await;

        Ok(Self {
            card_query,
            card_command,
        })
    }
}
