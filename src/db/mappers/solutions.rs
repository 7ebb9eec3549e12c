//! Solutions mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::SolutionEntity, error::AppResult};

/// Row access for `solutions`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SolutionsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<SolutionEntity>>;

    async fn find_all(&self) -> AppResult<Vec<SolutionEntity>>;

    async fn find_by_point_id(&self, point_id: i32) -> AppResult<Vec<SolutionEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut SolutionEntity) -> AppResult<()>;

    async fn update(&self, entity: &SolutionEntity) -> AppResult<()>;

    async fn delete(&self, entity: &SolutionEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`SolutionsMapper`]
pub struct PgSolutionsMapper {
    pool: PgPool,
}

impl PgSolutionsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SolutionsMapper for PgSolutionsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<SolutionEntity>> {
        let solution = sqlx::query_as::<_, SolutionEntity>(
            r#"SELECT id, answer_id, point_id FROM solutions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(solution)
    }

    async fn find_all(&self) -> AppResult<Vec<SolutionEntity>> {
        let rows = sqlx::query_as::<_, SolutionEntity>(
            r#"SELECT id, answer_id, point_id FROM solutions ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_point_id(&self, point_id: i32) -> AppResult<Vec<SolutionEntity>> {
        let rows = sqlx::query_as::<_, SolutionEntity>(
            r#"SELECT id, answer_id, point_id FROM solutions WHERE point_id = $1 ORDER BY id"#,
        )
        .bind(point_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut SolutionEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO solutions (answer_id, point_id)
            VALUES ($1, $2)
            RETURNING id
            "#,
        )
        .bind(entity.answer_id)
        .bind(entity.point_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &SolutionEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE solutions SET answer_id = $2, point_id = $3 WHERE id = $1"#)
            .bind(entity.id)
            .bind(entity.answer_id)
            .bind(entity.point_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &SolutionEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM solutions WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
