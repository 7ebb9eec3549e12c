//! Points mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::PointEntity, error::AppResult};

/// Row access for `points`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PointsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<PointEntity>>;

    async fn find_all(&self) -> AppResult<Vec<PointEntity>>;

    async fn find_by_quiz_id(&self, quiz_id: i32) -> AppResult<Vec<PointEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut PointEntity) -> AppResult<()>;

    async fn update(&self, entity: &PointEntity) -> AppResult<()>;

    async fn delete(&self, entity: &PointEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`PointsMapper`]
pub struct PgPointsMapper {
    pool: PgPool,
}

impl PgPointsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PointsMapper for PgPointsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<PointEntity>> {
        let point = sqlx::query_as::<_, PointEntity>(
            r#"SELECT id, type, text, quiz_id FROM points WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(point)
    }

    async fn find_all(&self) -> AppResult<Vec<PointEntity>> {
        let rows = sqlx::query_as::<_, PointEntity>(
            r#"SELECT id, type, text, quiz_id FROM points ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_quiz_id(&self, quiz_id: i32) -> AppResult<Vec<PointEntity>> {
        let rows = sqlx::query_as::<_, PointEntity>(
            r#"SELECT id, type, text, quiz_id FROM points WHERE quiz_id = $1 ORDER BY id"#,
        )
        .bind(quiz_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut PointEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO points (type, text, quiz_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&entity.point_type)
        .bind(&entity.text)
        .bind(entity.quiz_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &PointEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE points SET type = $2, text = $3, quiz_id = $4 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.point_type)
            .bind(&entity.text)
            .bind(entity.quiz_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &PointEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM points WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
