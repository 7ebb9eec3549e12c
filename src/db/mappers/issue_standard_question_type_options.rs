//! Issue standard question type options mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::IssueStandardQuestionTypeOptionEntity, error::AppResult};

/// Row access for `issue_standard_question_type_options`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueStandardQuestionTypeOptionsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardQuestionTypeOptionEntity>>;

    async fn find_all(&self) -> AppResult<Vec<IssueStandardQuestionTypeOptionEntity>>;

    async fn find_by_issue_standard_id(&self, issue_standard_id: i32) -> AppResult<Vec<IssueStandardQuestionTypeOptionEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut IssueStandardQuestionTypeOptionEntity) -> AppResult<()>;

    async fn update(&self, entity: &IssueStandardQuestionTypeOptionEntity) -> AppResult<()>;

    async fn delete(&self, entity: &IssueStandardQuestionTypeOptionEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`IssueStandardQuestionTypeOptionsMapper`]
pub struct PgIssueStandardQuestionTypeOptionsMapper {
    pool: PgPool,
}

impl PgIssueStandardQuestionTypeOptionsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueStandardQuestionTypeOptionsMapper for PgIssueStandardQuestionTypeOptionsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardQuestionTypeOptionEntity>> {
        let option = sqlx::query_as::<_, IssueStandardQuestionTypeOptionEntity>(
            r#"SELECT id, question_type_id, min_questions, max_questions, time_limit, issue_standard_id FROM issue_standard_question_type_options WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(option)
    }

    async fn find_all(&self) -> AppResult<Vec<IssueStandardQuestionTypeOptionEntity>> {
        let rows = sqlx::query_as::<_, IssueStandardQuestionTypeOptionEntity>(
            r#"SELECT id, question_type_id, min_questions, max_questions, time_limit, issue_standard_id FROM issue_standard_question_type_options ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_issue_standard_id(&self, issue_standard_id: i32) -> AppResult<Vec<IssueStandardQuestionTypeOptionEntity>> {
        let rows = sqlx::query_as::<_, IssueStandardQuestionTypeOptionEntity>(
            r#"SELECT id, question_type_id, min_questions, max_questions, time_limit, issue_standard_id FROM issue_standard_question_type_options WHERE issue_standard_id = $1 ORDER BY id"#,
        )
        .bind(issue_standard_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut IssueStandardQuestionTypeOptionEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO issue_standard_question_type_options (question_type_id, min_questions, max_questions, time_limit, issue_standard_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(entity.question_type_id)
        .bind(entity.min_questions)
        .bind(entity.max_questions)
        .bind(entity.time_limit)
        .bind(entity.issue_standard_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &IssueStandardQuestionTypeOptionEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE issue_standard_question_type_options SET question_type_id = $2, min_questions = $3, max_questions = $4, time_limit = $5, issue_standard_id = $6 WHERE id = $1"#)
            .bind(entity.id)
            .bind(entity.question_type_id)
            .bind(entity.min_questions)
            .bind(entity.max_questions)
            .bind(entity.time_limit)
            .bind(entity.issue_standard_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &IssueStandardQuestionTypeOptionEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM issue_standard_question_type_options WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
