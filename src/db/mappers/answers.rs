//! Answers mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::AnswerEntity, error::AppResult};

/// Row access for `answers`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnswersMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<AnswerEntity>>;

    async fn find_all(&self) -> AppResult<Vec<AnswerEntity>>;

    async fn find_by_question_id(&self, question_id: i32) -> AppResult<Vec<AnswerEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut AnswerEntity) -> AppResult<()>;

    async fn update(&self, entity: &AnswerEntity) -> AppResult<()>;

    async fn delete(&self, entity: &AnswerEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`AnswersMapper`]
pub struct PgAnswersMapper {
    pool: PgPool,
}

impl PgAnswersMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AnswersMapper for PgAnswersMapper {
    async fn find(&self, id: i32) -> AppResult<Option<AnswerEntity>> {
        let answer = sqlx::query_as::<_, AnswerEntity>(
            r#"SELECT id, txt, serial_number, is_right, question_id FROM answers WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(answer)
    }

    async fn find_all(&self) -> AppResult<Vec<AnswerEntity>> {
        let rows = sqlx::query_as::<_, AnswerEntity>(
            r#"SELECT id, txt, serial_number, is_right, question_id FROM answers ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_question_id(&self, question_id: i32) -> AppResult<Vec<AnswerEntity>> {
        let rows = sqlx::query_as::<_, AnswerEntity>(
            r#"SELECT id, txt, serial_number, is_right, question_id FROM answers WHERE question_id = $1 ORDER BY id"#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut AnswerEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO answers (txt, serial_number, is_right, question_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(&entity.txt)
        .bind(entity.serial_number)
        .bind(entity.is_right)
        .bind(entity.question_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &AnswerEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE answers SET txt = $2, serial_number = $3, is_right = $4, question_id = $5 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.txt)
            .bind(entity.serial_number)
            .bind(entity.is_right)
            .bind(entity.question_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &AnswerEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM answers WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
