//! Users service

use crate::{
    db::mappers::UsersMapper, entities::UserEntity, error::AppResult, models::UserModel,
};

use super::macros::model_service;

model_service! {
    /// Finds, saves and deletes user models
    UsersService(UsersMapper) for UserEntity => UserModel
}

impl UsersService {
    /// Find a user by login email
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<UserModel>> {
        Ok(self.mapper.find_by_email(email).await?.map(UserModel::from))
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::db::mappers::users::MockUsersMapper;

    #[tokio::test]
    async fn test_find_by_email() {
        let mut mapper = MockUsersMapper::new();
        mapper
            .expect_find_by_email()
            .withf(|email| email == "teacher@example.com")
            .returning(|email| {
                Ok(Some(UserEntity {
                    id: Some(4),
                    email: email.to_string(),
                    is_admin: false,
                    state: 1,
                    ..Default::default()
                }))
            });
        let service = UsersService::new(Arc::new(mapper));

        let user = service
            .find_by_email("teacher@example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(user.id, Some(4));
        assert!(!user.subjects.is_loaded());
    }

    #[tokio::test]
    async fn test_save_all_inserts_each_new_user() {
        let mut mapper = MockUsersMapper::new();
        let mut next_id = 0;
        mapper.expect_insert().times(2).returning(move |entity| {
            next_id += 1;
            entity.id = Some(next_id);
            Ok(())
        });
        let service = UsersService::new(Arc::new(mapper));
        let mut users = vec![UserModel::default(), UserModel::default()];

        service.save_all(&mut users).await.unwrap();

        assert_eq!(users[0].id, Some(1));
        assert_eq!(users[1].id, Some(2));
    }
}
