//! Issue response DTOs

use serde::Serialize;

use crate::{handlers::v1::Identity, models::IssueModel};

#[derive(Debug, Serialize)]
pub struct IssueResponse {
    pub id: Option<i32>,
    pub name: String,
    pub subject: Option<Identity>,
}

impl From<&IssueModel> for IssueResponse {
    fn from(issue: &IssueModel) -> Self {
        Self {
            id: issue.id,
            name: issue.name.clone(),
            subject: Identity::of(issue.subject.id()),
        }
    }
}
