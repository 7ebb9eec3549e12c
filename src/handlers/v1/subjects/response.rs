//! Subject response DTOs

use serde::Serialize;

use crate::{handlers::v1::Identity, models::SubjectModel};

#[derive(Debug, Serialize)]
pub struct SubjectResponse {
    pub id: Option<i32>,
    pub name: String,
    pub description: String,
    pub user: Option<Identity>,
}

impl From<&SubjectModel> for SubjectResponse {
    fn from(subject: &SubjectModel) -> Self {
        Self {
            id: subject.id,
            name: subject.name.clone(),
            description: subject.description.clone(),
            user: Identity::of(subject.user.id()),
        }
    }
}
