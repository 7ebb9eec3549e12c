//! Topics mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::TopicEntity, error::AppResult};

/// Row access for `topics`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TopicsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<TopicEntity>>;

    async fn find_all(&self) -> AppResult<Vec<TopicEntity>>;

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Vec<TopicEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut TopicEntity) -> AppResult<()>;

    async fn update(&self, entity: &TopicEntity) -> AppResult<()>;

    async fn delete(&self, entity: &TopicEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`TopicsMapper`]
pub struct PgTopicsMapper {
    pool: PgPool,
}

impl PgTopicsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TopicsMapper for PgTopicsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<TopicEntity>> {
        let topic = sqlx::query_as::<_, TopicEntity>(
            r#"SELECT id, name, subject_id FROM topics WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(topic)
    }

    async fn find_all(&self) -> AppResult<Vec<TopicEntity>> {
        let rows = sqlx::query_as::<_, TopicEntity>(
            r#"SELECT id, name, subject_id FROM topics ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Vec<TopicEntity>> {
        let rows = sqlx::query_as::<_, TopicEntity>(
            r#"SELECT id, name, subject_id FROM topics WHERE subject_id = $1 ORDER BY id"#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut TopicEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO topics (name, subject_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(&entity.name)
        .bind(entity.subject_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &TopicEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE topics SET name = $2, subject_id = $3 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.subject_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &TopicEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM topics WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
