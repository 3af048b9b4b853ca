use crate::{
    abstract_trait::card::repository::command::CardCommandRepositoryTrait, config::ConnectionPool,
    errors::RepositoryError, model::card::CardModel,
};
use anyhow::Result;
use async_trait::async_trait;
use tracing::error;

pub struct CardCommandRepository {
    db: ConnectionPool,
}

impl CardCommandRepository {
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

    async fn insert(&self, card: &CardModel) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            INSERT INTO cards (
                mobile_number,
                card_number,
                card_type,
                total_limit,
                amount_used,
                available_amount,
                created_at,
                updated_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, NOW(), NOW())
            RETURNING
                card_id,
                mobile_number,
                card_number,
                card_type,
                total_limit,
                amount_used,
                available_amount,
                created_at,
                updated_at
            "#,
        )
        .bind(&card.mobile_number)
        .bind(&card.card_number)
        .bind(&card.card_type)
        .bind(card.total_limit)
        .bind(card.amount_used)
        .bind(card.available_amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to insert card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(card)
    }

    async fn update(&self, card: &CardModel) -> Result<CardModel, RepositoryError> {
        let mut conn = self.get_conn().await?;

        let card = sqlx::query_as::<_, CardModel>(
            r#"
            UPDATE cards
            SET
                card_type = $2,
                total_limit = $3,
                amount_used = $4,
                available_amount = $5,
                updated_at = NOW()
            WHERE card_id = $1
            RETURNING
                card_id,
                mobile_number,
                card_number,
                card_type,
                total_limit,
                amount_used,
                available_amount,
                created_at,
                updated_at
            "#,
        )
        .bind(card.card_id)
        .bind(&card.card_type)
        .bind(card.total_limit)
        .bind(card.amount_used)
        .bind(card.available_amount)
        .fetch_one(&mut *conn)
        .await
        .map_err(|e| {
            error!("❌ Failed to update card: {e:?}");
            RepositoryError::from(e)
        })?;

        Ok(card)
    }
}

#[async_trait]
impl CardCommandRepositoryTrait for CardCommandRepository {
    async fn save(&self, card: &CardModel) -> Result<CardModel, RepositoryError> {
        if card.card_id == 0 {
            self.insert(card).await
        } else {
            self.update(card).await
        }
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), RepositoryError> {
        let mut conn = self.get_conn().await?;

        let result = sqlx::query("DELETE FROM cards WHERE card_id = $1")
            .bind(id)
            .execute(&mut *conn)
            .await
            .map_err(|e| {
                error!("❌ Failed to delete card: {e:?}");
                RepositoryError::Sqlx(e)
            })?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }

        Ok(())
    }
}
