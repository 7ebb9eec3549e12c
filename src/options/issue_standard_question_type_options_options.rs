//! Question type options options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{IssueStandardQuestionTypeOptionModel, Ref},
    services::Services,
};

use super::{IssueStandardsOptions, ModelOptions};

/// Relations of a question type option; the question type itself is read-only
#[derive(Clone)]
pub struct IssueStandardQuestionTypeOptionsOptions {
    services: Services,
    question_type: bool,
    issue_standard: Option<Box<IssueStandardsOptions>>,
}

impl IssueStandardQuestionTypeOptionsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            question_type: false,
            issue_standard: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_issue_standard(IssueStandardsOptions::for_auth(services))
    }

    pub fn with_question_type(mut self) -> Self {
        self.question_type = true;
        self
    }

    pub fn with_issue_standard(mut self, options: IssueStandardsOptions) -> Self {
        self.issue_standard = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<IssueStandardQuestionTypeOptionModel> for IssueStandardQuestionTypeOptionsOptions {
    async fn with_relation(
        &self,
        mut option: IssueStandardQuestionTypeOptionModel,
    ) -> AppResult<IssueStandardQuestionTypeOptionModel> {
        if let (true, Some(question_type_id)) = (self.question_type, option.question_type.id()) {
            if let Some(question_type) = self
                .services
                .question_types()
                .find(question_type_id)
                .await?
            {
                option.question_type = Ref::loaded(question_type);
            }
        }
        if let (Some(options), Some(issue_standard_id)) =
            (self.issue_standard.as_deref(), option.issue_standard.id())
        {
            if let Some(issue_standard) = self
                .services
                .issue_standards()
                .find_with(issue_standard_id, options)
                .await?
            {
                option.issue_standard = Ref::loaded(issue_standard);
            }
        }

        Ok(option)
    }

    async fn save_with_relations(
        &self,
        option: &mut IssueStandardQuestionTypeOptionModel,
    ) -> AppResult<()> {
        if let (Some(options), Some(issue_standard)) =
            (self.issue_standard.as_deref(), option.issue_standard.get_mut())
        {
            self.services
                .issue_standards()
                .save_with(issue_standard, options)
                .await?;
        }

        self.services.question_type_options().save(option).await
    }

    async fn delete_with_relations(
        &self,
        option: &IssueStandardQuestionTypeOptionModel,
    ) -> AppResult<()> {
        self.services.question_type_options().delete(option).await
    }
}
