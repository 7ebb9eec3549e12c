//! Issues mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::IssueEntity, error::AppResult};

/// Row access for `issues`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssuesMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<IssueEntity>>;

    async fn find_all(&self) -> AppResult<Vec<IssueEntity>>;

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Vec<IssueEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut IssueEntity) -> AppResult<()>;

    async fn update(&self, entity: &IssueEntity) -> AppResult<()>;

    async fn delete(&self, entity: &IssueEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`IssuesMapper`]
pub struct PgIssuesMapper {
    pool: PgPool,
}

impl PgIssuesMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssuesMapper for PgIssuesMapper {
    async fn find(&self, id: i32) -> AppResult<Option<IssueEntity>> {
        let issue = sqlx::query_as::<_, IssueEntity>(
            r#"SELECT id, name, subject_id FROM issues WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issue)
    }

    async fn find_all(&self) -> AppResult<Vec<IssueEntity>> {
        let rows = sqlx::query_as::<_, IssueEntity>(
            r#"SELECT id, name, subject_id FROM issues ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Vec<IssueEntity>> {
        let rows = sqlx::query_as::<_, IssueEntity>(
            r#"SELECT id, name, subject_id FROM issues WHERE subject_id = $1 ORDER BY id"#,
        )
        .bind(subject_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut IssueEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO issues (name, subject_id)
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

    async fn update(&self, entity: &IssueEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE issues SET name = $2, subject_id = $3 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(entity.subject_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &IssueEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM issues WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
