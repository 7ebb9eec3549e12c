//! Subjects service

use crate::{
    db::mappers::SubjectsMapper,
    entities::SubjectEntity,
    models::{SubjectModel, UserModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes subject models
    SubjectsService(SubjectsMapper) for SubjectEntity => SubjectModel
}

children_lookup! {
    SubjectsService => SubjectModel,
    /// List the subjects of a user
    find_by_user / find_by_user_with(user: UserModel) via find_by_user_id
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::mappers::subjects::MockSubjectsMapper, error::AppError, models::Ref};
    use mockall::predicate::eq;

    fn entity(id: i32) -> SubjectEntity {
        SubjectEntity {
            id: Some(id),
            name: format!("Subject {id}"),
            description: "About".to_string(),
            user_id: Some(4),
        }
    }

    fn service(mapper: MockSubjectsMapper) -> SubjectsService {
        SubjectsService::new(Arc::new(mapper))
    }

    #[tokio::test]
    async fn test_find_maps_entity() {
        let mut mapper = MockSubjectsMapper::new();
        mapper
            .expect_find()
            .with(eq(3))
            .times(1)
            .returning(|id| Ok(Some(entity(id))));

        let subject = service(mapper).find(3).await.unwrap().unwrap();

        assert_eq!(subject, SubjectModel::from(entity(3)));
        assert_eq!(subject.user, Ref::Empty(4));
    }

    #[tokio::test]
    async fn test_find_absent() {
        let mut mapper = MockSubjectsMapper::new();
        mapper.expect_find().returning(|_| Ok(None));

        assert!(service(mapper).find(3).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_unidentified_user_skips_mapper() {
        let mut mapper = MockSubjectsMapper::new();
        mapper.expect_find_by_user_id().never();

        let found = service(mapper)
            .find_by_user(&UserModel::default())
            .await
            .unwrap();

        assert!(found.is_empty());
    }

    #[tokio::test]
    async fn test_save_inserts_transient_model() {
        let mut mapper = MockSubjectsMapper::new();
        mapper
            .expect_insert()
            .withf(|entity| entity.id.is_none() && entity.name == "Algebra")
            .times(1)
            .returning(|entity| {
                entity.id = Some(10);
                Ok(())
            });
        mapper.expect_update().never();

        let mut subject = SubjectModel {
            name: "Algebra".to_string(),
            ..Default::default()
        };
        service(mapper).save(&mut subject).await.unwrap();

        assert_eq!(subject.id, Some(10));
    }

    #[tokio::test]
    async fn test_save_updates_persisted_model() {
        let mut mapper = MockSubjectsMapper::new();
        mapper.expect_insert().never();
        mapper
            .expect_update()
            .with(eq(entity(3)))
            .times(1)
            .returning(|_| Ok(()));

        let mut subject = SubjectModel::from(entity(3));
        service(mapper).save(&mut subject).await.unwrap();

        assert_eq!(subject.id, Some(3));
    }

    #[tokio::test]
    async fn test_delete_unidentified_model_fails() {
        let mut mapper = MockSubjectsMapper::new();
        mapper.expect_delete().never();

        let result = service(mapper).delete(&SubjectModel::default()).await;

        assert!(matches!(result, Err(AppError::DeleteUnidentifiedModel)));
    }

    #[tokio::test]
    async fn test_delete_identified_model() {
        let mut mapper = MockSubjectsMapper::new();
        mapper
            .expect_delete()
            .with(eq(entity(3)))
            .times(1)
            .returning(|_| Ok(()));

        service(mapper)
            .delete(&SubjectModel::from(entity(3)))
            .await
            .unwrap();
    }
}
