//! Quizzes mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::QuizEntity, error::AppResult};

/// Row access for `quizzes`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizzesMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<QuizEntity>>;

    async fn find_all(&self) -> AppResult<Vec<QuizEntity>>;

    async fn find_by_issue_id(&self, issue_id: i32) -> AppResult<Vec<QuizEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut QuizEntity) -> AppResult<()>;

    async fn update(&self, entity: &QuizEntity) -> AppResult<()>;

    async fn delete(&self, entity: &QuizEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`QuizzesMapper`]
pub struct PgQuizzesMapper {
    pool: PgPool,
}

impl PgQuizzesMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizzesMapper for PgQuizzesMapper {
    async fn find(&self, id: i32) -> AppResult<Option<QuizEntity>> {
        let quiz = sqlx::query_as::<_, QuizEntity>(
            r#"SELECT id, invite_code, code_expired, started_at, finished_at, issue_id FROM quizzes WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(quiz)
    }

    async fn find_all(&self) -> AppResult<Vec<QuizEntity>> {
        let rows = sqlx::query_as::<_, QuizEntity>(
            r#"SELECT id, invite_code, code_expired, started_at, finished_at, issue_id FROM quizzes ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_issue_id(&self, issue_id: i32) -> AppResult<Vec<QuizEntity>> {
        let rows = sqlx::query_as::<_, QuizEntity>(
            r#"SELECT id, invite_code, code_expired, started_at, finished_at, issue_id FROM quizzes WHERE issue_id = $1 ORDER BY id"#,
        )
        .bind(issue_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut QuizEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO quizzes (invite_code, code_expired, started_at, finished_at, issue_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&entity.invite_code)
        .bind(entity.code_expired)
        .bind(entity.started_at)
        .bind(entity.finished_at)
        .bind(entity.issue_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &QuizEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE quizzes SET invite_code = $2, code_expired = $3, started_at = $4, finished_at = $5, issue_id = $6 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.invite_code)
            .bind(entity.code_expired)
            .bind(entity.started_at)
            .bind(entity.finished_at)
            .bind(entity.issue_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &QuizEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM quizzes WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
