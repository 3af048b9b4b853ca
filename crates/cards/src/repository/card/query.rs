use crate::{
    abstract_trait::card::repository::query::CardQueryRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CardQueryRepository {
    db: ConnectionPool,
}

impl CardQueryRepository {
    pub fn new(db: ConnectionPool) -> Self {
        Self { db }
    }

    async fn get_conn(
        &self,
    ) -> Result<sqlx::pool::PoolConnection<sqlx::Postgres>, RepositoryError> {
        self.db.acquire().await.map_err(|e| {
            error!("❌ Failed to acquire DB connection: {e:?}");
            RepositoryError::from(e)
        })
    }
}

#[async_trait]
impl CardQueryRepositoryTrait for CardQueryRepository {
    async fn find_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                card_id,
                mobile_number,
                card_number,
                card_type,
                total_limit,
                amount_used,
                available_amount,
                created_at,
                updated_at
            FROM cards
            WHERE mobile_number = $1
            "#,
        )
        .bind(mobile_number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card by mobile number: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }

    async fn find_by_card_number(
        &self,
        card_number: &str,
    ) -> Result<Option<CardModel>, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            SELECT
                card_id,
                mobile_number,
                card_number,
                card_type,
                total_limit,
                amount_used,
                available_amount,
                created_at,
                updated_at
            FROM cards
            WHERE card_number = $1
            "#,
        )
        .bind(card_number)
        .fetch_optional(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to fetch card by card number: {e:?}");
            RepositoryError::Sqlx(e)
        })?;

        Ok(card)
    }
}
