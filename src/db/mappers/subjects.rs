//! Subjects mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::SubjectEntity, error::AppResult};

/// Row access for `subjects`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SubjectsMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<SubjectEntity>>;

    async fn find_all(&self) -> AppResult<Vec<SubjectEntity>>;

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<SubjectEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut SubjectEntity) -> AppResult<()>;

    async fn update(&self, entity: &SubjectEntity) -> AppResult<()>;

    async fn delete(&self, entity: &SubjectEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`SubjectsMapper`]
pub struct PgSubjectsMapper {
    pool: PgPool,
}

impl PgSubjectsMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectsMapper for PgSubjectsMapper {
    async fn find(&self, id: i32) -> AppResult<Option<SubjectEntity>> {
        let subject = sqlx::query_as::<_, SubjectEntity>(
            r#"SELECT id, name, description, user_id FROM subjects WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(subject)
    }

    async fn find_all(&self) -> AppResult<Vec<SubjectEntity>> {
        let rows = sqlx::query_as::<_, SubjectEntity>(
            r#"SELECT id, name, description, user_id FROM subjects ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_user_id(&self, user_id: i32) -> AppResult<Vec<SubjectEntity>> {
        let rows = sqlx::query_as::<_, SubjectEntity>(
            r#"SELECT id, name, description, user_id FROM subjects WHERE user_id = $1 ORDER BY id"#,
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut SubjectEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO subjects (name, description, user_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(&entity.name)
        .bind(&entity.description)
        .bind(entity.user_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &SubjectEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE subjects SET name = $2, description = $3, user_id = $4 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.name)
            .bind(&entity.description)
            .bind(entity.user_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &SubjectEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM subjects WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
