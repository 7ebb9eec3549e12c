//! Topic response DTOs

use serde::Serialize;

use crate::{handlers::v1::Identity, models::TopicModel};

#[derive(Debug, Serialize)]
pub struct TopicResponse {
    pub id: Option<i32>,
    pub name: String,
    pub subject: Option<Identity>,
}

impl From<&TopicModel> for TopicResponse {
    fn from(topic: &TopicModel) -> Self {
        Self {
            id: topic.id,
            name: topic.name.clone(),
            subject: Identity::of(topic.subject.id()),
        }
    }
}
