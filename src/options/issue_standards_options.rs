//! Issue standards options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{IssueStandardModel, Lazy, Ref},
    services::Services,
};

use super::{
    IssueStandardQuestionTypeOptionsOptions, IssueStandardTopicPrioritiesOptions, ModelOptions,
    SubjectsOptions,
};

/// Relations of an issue standard to hydrate or cascade
#[derive(Clone)]
pub struct IssueStandardsOptions {
    services: Services,
    subject: Option<Box<SubjectsOptions>>,
    topic_priorities: Option<Box<IssueStandardTopicPrioritiesOptions>>,
    question_type_options: Option<Box<IssueStandardQuestionTypeOptionsOptions>>,
}

impl IssueStandardsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            subject: None,
            topic_priorities: None,
            question_type_options: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_subject(SubjectsOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services)
            .with_topic_priorities(IssueStandardTopicPrioritiesOptions::new(services))
            .with_question_type_options(IssueStandardQuestionTypeOptionsOptions::new(services))
    }

    pub fn with_subject(mut self, options: SubjectsOptions) -> Self {
        self.subject = Some(Box::new(options));
        self
    }

    pub fn with_topic_priorities(mut self, options: IssueStandardTopicPrioritiesOptions) -> Self {
        self.topic_priorities = Some(Box::new(options));
        self
    }

    pub fn with_question_type_options(
        mut self,
        options: IssueStandardQuestionTypeOptionsOptions,
    ) -> Self {
        self.question_type_options = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<IssueStandardModel> for IssueStandardsOptions {
    async fn with_relation(
        &self,
        mut issue_standard: IssueStandardModel,
    ) -> AppResult<IssueStandardModel> {
        if let (Some(options), Some(subject_id)) =
            (self.subject.as_deref(), issue_standard.subject.id())
        {
            if let Some(subject) = self
                .services
                .subjects()
                .find_with(subject_id, options)
                .await?
            {
                issue_standard.subject = Ref::loaded(subject);
            }
        }
        if let Some(options) = self.topic_priorities.as_deref() {
            let priorities = self
                .services
                .topic_priorities()
                .find_by_issue_standard_with(&issue_standard, options)
                .await?;
            issue_standard.topic_priorities = Lazy::Loaded(priorities);
        }
        if let Some(options) = self.question_type_options.as_deref() {
            let question_type_options = self
                .services
                .question_type_options()
                .find_by_issue_standard_with(&issue_standard, options)
                .await?;
            issue_standard.question_type_options = Lazy::Loaded(question_type_options);
        }

        Ok(issue_standard)
    }

    async fn save_with_relations(&self, issue_standard: &mut IssueStandardModel) -> AppResult<()> {
        if let (Some(options), Some(subject)) =
            (self.subject.as_deref(), issue_standard.subject.get_mut())
        {
            self.services.subjects().save_with(subject, options).await?;
        }

        self.services.issue_standards().save(issue_standard).await?;

        let issue_standard_id = issue_standard.id;
        if let (Some(options), Some(priorities)) = (
            self.topic_priorities.as_deref(),
            issue_standard.topic_priorities.get_mut(),
        ) {
            for priority in priorities.iter_mut() {
                priority.issue_standard.refer_to(issue_standard_id);
            }
            self.services
                .topic_priorities()
                .save_all_with(priorities, options)
                .await?;
        }
        if let (Some(options), Some(question_type_options)) = (
            self.question_type_options.as_deref(),
            issue_standard.question_type_options.get_mut(),
        ) {
            for question_type_option in question_type_options.iter_mut() {
                question_type_option.issue_standard.refer_to(issue_standard_id);
            }
            self.services
                .question_type_options()
                .save_all_with(question_type_options, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, issue_standard: &IssueStandardModel) -> AppResult<()> {
        if let Some(options) = self.topic_priorities.as_deref() {
            let priorities = match issue_standard.topic_priorities.get() {
                Some(priorities) => priorities.clone(),
                None => {
                    self.services
                        .topic_priorities()
                        .find_by_issue_standard(issue_standard)
                        .await?
                }
            };
            self.services
                .topic_priorities()
                .delete_all_with(&priorities, options)
                .await?;
        }
        if let Some(options) = self.question_type_options.as_deref() {
            let question_type_options = match issue_standard.question_type_options.get() {
                Some(question_type_options) => question_type_options.clone(),
                None => {
                    self.services
                        .question_type_options()
                        .find_by_issue_standard(issue_standard)
                        .await?
                }
            };
            self.services
                .question_type_options()
                .delete_all_with(&question_type_options, options)
                .await?;
        }

        self.services.issue_standards().delete(issue_standard).await
    }
}
