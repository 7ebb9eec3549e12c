//! Topics service

use crate::{
    db::mappers::TopicsMapper,
    entities::TopicEntity,
    models::{SubjectModel, TopicModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes topic models
    TopicsService(TopicsMapper) for TopicEntity => TopicModel
}

children_lookup! {
    TopicsService => TopicModel,
    find_by_subject / find_by_subject_with(subject: SubjectModel) via find_by_subject_id
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{db::mappers::topics::MockTopicsMapper, error::AppError};
    use mockall::predicate::eq;

    fn entity(id: i32, subject_id: i32) -> TopicEntity {
        TopicEntity {
            id: Some(id),
            name: format!("Topic {id}"),
            subject_id: Some(subject_id),
        }
    }

    #[tokio::test]
    async fn test_find_by_subject_is_keyed_by_subject_id() {
        let mut mapper = MockTopicsMapper::new();
        mapper
            .expect_find_by_subject_id()
            .with(eq(3))
            .times(1)
            .returning(|subject_id| Ok(vec![entity(1, subject_id), entity(2, subject_id)]));
        let subject = SubjectModel {
            id: Some(3),
            ..Default::default()
        };

        let topics = TopicsService::new(Arc::new(mapper))
            .find_by_subject(&subject)
            .await
            .unwrap();

        assert_eq!(
            topics,
            vec![TopicModel::from(entity(1, 3)), TopicModel::from(entity(2, 3))]
        );
    }

    #[tokio::test]
    async fn test_save_all_mixes_insert_and_update() {
        let mut mapper = MockTopicsMapper::new();
        mapper
            .expect_update()
            .with(eq(entity(1, 3)))
            .times(1)
            .returning(|_| Ok(()));
        mapper.expect_insert().times(1).returning(|entity| {
            entity.id = Some(10);
            Ok(())
        });

        let mut topics = vec![
            TopicModel::from(entity(1, 3)),
            TopicModel {
                name: "New".to_string(),
                ..Default::default()
            },
        ];
        TopicsService::new(Arc::new(mapper))
            .save_all(&mut topics)
            .await
            .unwrap();

        assert_eq!(topics[0].id, Some(1));
        assert_eq!(topics[1].id, Some(10));
    }

    #[tokio::test]
    async fn test_delete_all_stops_at_unidentified_model() {
        let mut mapper = MockTopicsMapper::new();
        mapper
            .expect_delete()
            .with(eq(entity(1, 3)))
            .times(1)
            .returning(|_| Ok(()));

        let topics = vec![TopicModel::from(entity(1, 3)), TopicModel::default()];
        let result = TopicsService::new(Arc::new(mapper))
            .delete_all(&topics)
            .await;

        assert!(matches!(result, Err(AppError::DeleteUnidentifiedModel)));
    }
}
