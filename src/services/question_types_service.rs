//! Question types service

use std::sync::Arc;

use crate::{db::mappers::QuestionTypesMapper, error::AppResult, models::QuestionTypeModel};

/// Lookup of the seeded question types
pub struct QuestionTypesService {
    mapper: Arc<dyn QuestionTypesMapper>,
}

impl QuestionTypesService {
    pub fn new(mapper: Arc<dyn QuestionTypesMapper>) -> Self {
        Self { mapper }
    }

    pub async fn find(&self, id: i32) -> AppResult<Option<QuestionTypeModel>> {
        Ok(self.mapper.find(id).await?.map(QuestionTypeModel::from))
    }

    pub async fn find_all(&self) -> AppResult<Vec<QuestionTypeModel>> {
        let entities = self.mapper.find_all().await?;

        Ok(entities.into_iter().map(QuestionTypeModel::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{db::mappers::question_types::MockQuestionTypesMapper, entities::QuestionTypeEntity};

    #[tokio::test]
    async fn test_find_all_maps_seeded_types() {
        let mut mapper = MockQuestionTypesMapper::new();
        mapper.expect_find_all().times(1).returning(|| {
            Ok(vec![
                QuestionTypeEntity {
                    id: Some(1),
                    name: "One of many".to_string(),
                },
                QuestionTypeEntity {
                    id: Some(4),
                    name: "Ordering".to_string(),
                },
            ])
        });
        let service = QuestionTypesService::new(Arc::new(mapper));

        let types = service.find_all().await.unwrap();

        assert_eq!(types.len(), 2);
        assert_eq!(types[1].id, Some(4));
        assert_eq!(types[1].name, "Ordering");
    }

    #[tokio::test]
    async fn test_find_absent() {
        let mut mapper = MockQuestionTypesMapper::new();
        mapper.expect_find().returning(|_| Ok(None));
        let service = QuestionTypesService::new(Arc::new(mapper));

        assert!(service.find(9).await.unwrap().is_none());
    }
}
