//! Subject model

use crate::entities::SubjectEntity;

use super::{Identified, IssueModel, IssueStandardModel, Lazy, Ref, TopicModel, UserModel};

/// Subject domain model
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SubjectModel {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub user: Ref<UserModel>,
    pub topics: Lazy<Vec<TopicModel>>,
    pub issue_standard: Lazy<Option<Box<IssueStandardModel>>>,
    pub issues: Lazy<Vec<IssueModel>>,
}

impl Identified for SubjectModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<SubjectEntity> for SubjectModel {
    fn from(entity: SubjectEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            user: Ref::from_id(entity.user_id),
            topics: Lazy::Unloaded,
            issue_standard: Lazy::Unloaded,
            issues: Lazy::Unloaded,
        }
    }
}

impl From<&SubjectModel> for SubjectEntity {
    fn from(model: &SubjectModel) -> Self {
        Self {
            id: model.id,
            name: model.name.clone(),
            description: model.description.clone(),
            user_id: model.user.id(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_round_trip_keeps_user_reference() {
        let entity = SubjectEntity {
            id: Some(4),
            name: "Algebra".to_string(),
            description: "Linear algebra".to_string(),
            user_id: Some(2),
        };

        let model = SubjectModel::from(entity.clone());
        assert_eq!(model.user, Ref::Empty(2));
        assert!(!model.topics.is_loaded());
        assert_eq!(SubjectEntity::from(&model), entity);
    }

    #[test]
    fn test_loaded_user_supplies_foreign_key() {
        let model = SubjectModel {
            name: "Geometry".to_string(),
            user: Ref::loaded(UserModel {
                id: Some(9),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(SubjectEntity::from(&model).user_id, Some(9));
    }
}
