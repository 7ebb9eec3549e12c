//! Issue standards mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::IssueStandardEntity, error::AppResult};

/// Row access for `issue_standards`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueStandardsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardEntity>>;

    async fn find_all(&self) -> AppResult<Vec<IssueStandardEntity>>;

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Option<IssueStandardEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut IssueStandardEntity) -> AppResult<()>;

    async fn update(&self, entity: &IssueStandardEntity) -> AppResult<()>;

    async fn delete(&self, entity: &IssueStandardEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`IssueStandardsMapper`]
pub struct PgIssueStandardsMapper {
    pool: PgPool,
}

impl PgIssueStandardsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueStandardsMapper for PgIssueStandardsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardEntity>> {
        let issue_standard = sqlx::query_as::<_, IssueStandardEntity>(
            r#"SELECT id, time_limit, questions_number, subject_id FROM issue_standards WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issue_standard)
    }

    async fn find_all(&self) -> AppResult<Vec<IssueStandardEntity>> {
        let rows = sqlx::query_as::<_, IssueStandardEntity>(
            r#"SELECT id, time_limit, questions_number, subject_id FROM issue_standards ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_subject_id(&self, subject_id: i32) -> AppResult<Option<IssueStandardEntity>> {
        let issue_standard = sqlx::query_as::<_, IssueStandardEntity>(
            r#"SELECT id, time_limit, questions_number, subject_id FROM issue_standards WHERE subject_id = $1"#,
        )
        .bind(subject_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(issue_standard)
    }

    async fn insert(&self, entity: &mut IssueStandardEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO issue_standards (time_limit, questions_number, subject_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(entity.time_limit)
        .bind(entity.questions_number)
        .bind(entity.subject_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &IssueStandardEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE issue_standards SET time_limit = $2, questions_number = $3, subject_id = $4 WHERE id = $1"#)
            .bind(entity.id)
            .bind(entity.time_limit)
            .bind(entity.questions_number)
            .bind(entity.subject_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &IssueStandardEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM issue_standards WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
