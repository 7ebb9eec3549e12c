//! Issue standard topic priorities mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::IssueStandardTopicPriorityEntity, error::AppResult};

/// Row access for `issue_standard_topic_priorities`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueStandardTopicPrioritiesMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardTopicPriorityEntity>>;

    async fn find_all(&self) -> AppResult<Vec<IssueStandardTopicPriorityEntity>>;

    async fn find_by_issue_standard_id(&self, issue_standard_id: i32) -> AppResult<Vec<IssueStandardTopicPriorityEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut IssueStandardTopicPriorityEntity) -> AppResult<()>;

    async fn update(&self, entity: &IssueStandardTopicPriorityEntity) -> AppResult<()>;

    async fn delete(&self, entity: &IssueStandardTopicPriorityEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`IssueStandardTopicPrioritiesMapper`]
pub struct PgIssueStandardTopicPrioritiesMapper {
    pool: PgPool,
}

impl PgIssueStandardTopicPrioritiesMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IssueStandardTopicPrioritiesMapper for PgIssueStandardTopicPrioritiesMapper {
    async fn find(&self, id: i32) -> AppResult<Option<IssueStandardTopicPriorityEntity>> {
        let priority = sqlx::query_as::<_, IssueStandardTopicPriorityEntity>(
            r#"SELECT id, topic_id, is_preferable, issue_standard_id FROM issue_standard_topic_priorities WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(priority)
    }

    async fn find_all(&self) -> AppResult<Vec<IssueStandardTopicPriorityEntity>> {
        let rows = sqlx::query_as::<_, IssueStandardTopicPriorityEntity>(
            r#"SELECT id, topic_id, is_preferable, issue_standard_id FROM issue_standard_topic_priorities ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_issue_standard_id(&self, issue_standard_id: i32) -> AppResult<Vec<IssueStandardTopicPriorityEntity>> {
        let rows = sqlx::query_as::<_, IssueStandardTopicPriorityEntity>(
            r#"SELECT id, topic_id, is_preferable, issue_standard_id FROM issue_standard_topic_priorities WHERE issue_standard_id = $1 ORDER BY id"#,
        )
        .bind(issue_standard_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn insert(&self, entity: &mut IssueStandardTopicPriorityEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO issue_standard_topic_priorities (topic_id, is_preferable, issue_standard_id)
            VALUES ($1, $2, $3)
            RETURNING id
            "#,
        )
        .bind(entity.topic_id)
        .bind(entity.is_preferable)
        .bind(entity.issue_standard_id)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &IssueStandardTopicPriorityEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE issue_standard_topic_priorities SET topic_id = $2, is_preferable = $3, issue_standard_id = $4 WHERE id = $1"#)
            .bind(entity.id)
            .bind(entity.topic_id)
            .bind(entity.is_preferable)
            .bind(entity.issue_standard_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &IssueStandardTopicPriorityEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM issue_standard_topic_priorities WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
