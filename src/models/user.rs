//! User model

use crate::entities::UserEntity;

use super::{Identified, Lazy, SubjectModel};

/// User domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct UserModel {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub surname: String,
    pub email: String,
    /// Argon2 hash, never the plain password
    pub password: String,
    pub is_admin: bool,
    pub state: i32,
    pub subjects: Lazy<Vec<SubjectModel>>,
}

impl Identified for UserModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<UserEntity> for UserModel {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            surname: entity.surname,
            email: entity.email,
            password: entity.password,
            is_admin: entity.is_admin,
            state: entity.state,
            subjects: Lazy::Unloaded,
        }
    }
}

impl From<&UserModel> for UserEntity {
    fn from(model: &UserModel) -> Self {
        Self {
            id: model.id,
            first_name: model.first_name.clone(),
            last_name: model.last_name.clone(),
            surname: model.surname.clone(),
            email: model.email.clone(),
            password: model.password.clone(),
            is_admin: model.is_admin,
            state: model.state,
        }
    }
}
