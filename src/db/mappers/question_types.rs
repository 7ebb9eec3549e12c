//! Question types mapper
//!
//! Question types are seeded by the initial migration and never written
//! at runtime, so this mapper only reads.

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::QuestionTypeEntity, error::AppResult};

/// Read access for `question_types`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionTypesMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<QuestionTypeEntity>>;

    async fn find_all(&self) -> AppResult<Vec<QuestionTypeEntity>>;
}

/// PostgreSQL implementation of [`QuestionTypesMapper`]
pub struct PgQuestionTypesMapper {
    pool: PgPool,
}

impl PgQuestionTypesMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionTypesMapper for PgQuestionTypesMapper {
    async fn find(&self, id: i32) -> AppResult<Option<QuestionTypeEntity>> {
        let question_type = sqlx::query_as::<_, QuestionTypeEntity>(
            r#"SELECT id, name FROM question_types WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question_type)
    }

    async fn find_all(&self) -> AppResult<Vec<QuestionTypeEntity>> {
        let rows = sqlx::query_as::<_, QuestionTypeEntity>(
            r#"SELECT id, name FROM question_types ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
