//! Questions mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::QuestionEntity, error::AppResult};

/// Row access for `questions`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuestionsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<QuestionEntity>>;

    async fn find_all(&self) -> AppResult<Vec<QuestionEntity>>;

    async fn find_by_topic_id(&self, topic_id: i32) -> AppResult<Vec<QuestionEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut QuestionEntity) -> AppResult<()>;

    async fn update(&self, entity: &QuestionEntity) -> AppResult<()>;

    async fn delete(&self, entity: &QuestionEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`QuestionsMapper`]
pub struct PgQuestionsMapper {
    pool: PgPool,
}

impl PgQuestionsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuestionsMapper for PgQuestionsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<QuestionEntity>> {
        let question = sqlx::query_as::<_, QuestionEntity>(
            r#"SELECT id, text, question_type_id, topic_id FROM questions WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn find_all(&self) -> AppResult<Vec<QuestionEntity>> {
        let rows = sqlx::query_as::<_, QuestionEntity>(
            r#"SELECT id, text, question_type_id, topic_id FROM questions ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_topic_id(&self, topic_id: i32) -> AppResult<Vec<QuestionEntity>> {
        let rows = sqlx::query_as::<_, QuestionEntity>(
            r#"SELECT id, text, question_type_id, topic_id FROM questions WHERE topic_id = $1 ORDER BY id"#,
        )
        .bind(topic_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut QuestionEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO questions (text, question_type_id, topic_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&entity.text)
        .bind(entity.question_type_id)
        .bind(entity.topic_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &QuestionEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE questions SET text = $2, question_type_id = $3, topic_id = $4 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.text)
            .bind(entity.question_type_id)
            .bind(entity.topic_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &QuestionEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM questions WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
