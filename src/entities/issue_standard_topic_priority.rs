//! Issue standard topic priority entity

use sqlx::FromRow;

/// `issue_standard_topic_priorities` row
#[derive(Debug, Clone, PartialEq, Eq, Default, FromRow)]
pub struct IssueStandardTopicPriorityEntity {
    pub id: Option<i32>,
    pub topic_id: Option<i32>,
    pub is_preferable: bool,
    pub issue_standard_id: Option<i32>,
}
