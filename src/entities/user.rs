//! User entity

use sqlx::FromRow;

/// `users` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct UserEntity {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub surname: String,
    pub email: String,
    pub password: String,
    pub is_admin: bool,
    pub state: i32,
}
