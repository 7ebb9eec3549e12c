//! Issue standard topic priority model

use crate::entities::IssueStandardTopicPriorityEntity;

use super::{Identified, IssueStandardModel, Ref, TopicModel};

/// Marks a topic as preferred or avoided when issues are generated
#[derive(Debug, Clone, PartialEq, Default)]
pub struct IssueStandardTopicPriorityModel {
    pub id: Option<i32>,
    pub topic: Ref<TopicModel>,
    pub is_preferable: bool,
    pub issue_standard: Ref<IssueStandardModel>,
}

impl Identified for IssueStandardTopicPriorityModel {
    fn id(&self) -> Option<i32> {
        self.id
    }
}

impl From<IssueStandardTopicPriorityEntity> for IssueStandardTopicPriorityModel {
    fn from(entity: IssueStandardTopicPriorityEntity) -> Self {
        Self {
            id: entity.id,
            topic: Ref::from_id(entity.topic_id),
            is_preferable: entity.is_preferable,
            issue_standard: Ref::from_id(entity.issue_standard_id),
        }
    }
}

impl From<&IssueStandardTopicPriorityModel> for IssueStandardTopicPriorityEntity {
    fn from(model: &IssueStandardTopicPriorityModel) -> Self {
        Self {
            id: model.id,
            topic_id: model.topic.id(),
            is_preferable: model.is_preferable,
            issue_standard_id: model.issue_standard.id(),
        }
    }
}
