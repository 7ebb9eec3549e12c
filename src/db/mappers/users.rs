//! Users mapper

use async_trait::async_trait;
use sqlx::PgPool;

use crate::{entities::UserEntity, error::AppResult};

/// Row access for `users`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersMapper: Send + Sync {
    async fn find(&self, id: i32) -> AppResult<Option<UserEntity>>;

    async fn find_all(&self) -> AppResult<Vec<UserEntity>>;

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>>;

    /// Inserts the row and stores the generated id on `entity`
    async fn insert(&self, entity: &mut UserEntity) -> AppResult<()>;

    async fn update(&self, entity: &UserEntity) -> AppResult<()>;

    async fn delete(&self, entity: &UserEntity) -> AppResult<()>;
}

/// PostgreSQL implementation of [`UsersMapper`]
pub struct PgUsersMapper {
    pool: PgPool,
}

impl PgUsersMapper {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UsersMapper for PgUsersMapper {
    async fn find(&self, id: i32) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"SELECT id, first_name, last_name, surname, email, password, is_admin, state FROM users WHERE id = $1"#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn find_all(&self) -> AppResult<Vec<UserEntity>> {
        let rows = sqlx::query_as::<_, UserEntity>(
            r#"SELECT id, first_name, last_name, surname, email, password, is_admin, state FROM users ORDER BY id"#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<UserEntity>> {
        let user = sqlx::query_as::<_, UserEntity>(
            r#"SELECT id, first_name, last_name, surname, email, password, is_admin, state FROM users WHERE email = $1"#,
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }

    async fn insert(&self, entity: &mut UserEntity) -> AppResult<()> {
        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO users (first_name, last_name, surname, email, password, is_admin, state)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING id
            "#,
        )
        .bind(&entity.first_name)
        .bind(&entity.last_name)
        .bind(&entity.surname)
        .bind(&entity.email)
        .bind(&entity.password)
        .bind(entity.is_admin)
        .bind(entity.state)
        .fetch_one(&self.pool)
        .await?;

        entity.id = Some(id);
        Ok(())
    }

    async fn update(&self, entity: &UserEntity) -> AppResult<()> {
        sqlx::query(r#"UPDATE users SET first_name = $2, last_name = $3, surname = $4, email = $5, password = $6, is_admin = $7, state = $8 WHERE id = $1"#)
            .bind(entity.id)
            .bind(&entity.first_name)
            .bind(&entity.last_name)
            .bind(&entity.surname)
            .bind(&entity.email)
            .bind(&entity.password)
            .bind(entity.is_admin)
            .bind(entity.state)
            .execute(&self.pool)
            .await?;

        Ok(())
    }

    async fn delete(&self, entity: &UserEntity) -> AppResult<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(entity.id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
