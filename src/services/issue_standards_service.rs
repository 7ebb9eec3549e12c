//! Issue standards service

use crate::{
    db::mappers::IssueStandardsMapper,
    entities::IssueStandardEntity,
    error::AppResult,
    models::{IssueStandardModel, SubjectModel},
    options::ModelOptions,
};

use super::macros::model_service;

model_service! {
    /// Finds, saves and deletes issue standard models
    IssueStandardsService(IssueStandardsMapper) for IssueStandardEntity => IssueStandardModel
}

impl IssueStandardsService {
    /// Find the issue standard of a subject; a subject has at most one
    pub async fn find_by_subject(
        &self,
        subject: &SubjectModel,
    ) -> AppResult<Option<IssueStandardModel>> {
        let Some(subject_id) = subject.id else {
            return Ok(None);
        };

        Ok(self
            .mapper
            .find_by_subject_id(subject_id)
            .await?
            .map(IssueStandardModel::from))
    }

    /// Find the issue standard of a subject and hydrate it
    pub async fn find_by_subject_with(
        &self,
        subject: &SubjectModel,
        options: &dyn ModelOptions<IssueStandardModel>,
    ) -> AppResult<Option<IssueStandardModel>> {
        match self.find_by_subject(subject).await? {
            Some(model) => options.with_relation(model).await.map(Some),
            None => Ok(None),
        }
    }
}
