//! Issues options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{IssueModel, Lazy, Ref},
    services::Services,
};

use super::{ModelOptions, QuizzesOptions, SubjectsOptions};

/// Relations of an issue to hydrate or cascade
#[derive(Clone)]
pub struct IssuesOptions {
    services: Services,
    subject: Option<Box<SubjectsOptions>>,
    quizzes: Option<Box<QuizzesOptions>>,
}

impl IssuesOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            subject: None,
            quizzes: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_subject(SubjectsOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_quizzes(QuizzesOptions::for_delete(services))
    }

    pub fn with_subject(mut self, options: SubjectsOptions) -> Self {
        self.subject = Some(Box::new(options));
        self
    }

    pub fn with_quizzes(mut self, options: QuizzesOptions) -> Self {
        self.quizzes = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<IssueModel> for IssuesOptions {
    async fn with_relation(&self, mut issue: IssueModel) -> AppResult<IssueModel> {
        if let (Some(options), Some(subject_id)) = (self.subject.as_deref(), issue.subject.id()) {
            if let Some(subject) = self
                .services
                .subjects()
                .find_with(subject_id, options)
                .await?
            {
                issue.subject = Ref::loaded(subject);
            }
        }
        if let Some(options) = self.quizzes.as_deref() {
            let quizzes = self
                .services
                .quizzes()
                .find_by_issue_with(&issue, options)
                .await?;
            issue.quizzes = Lazy::Loaded(quizzes);
        }

        Ok(issue)
    }

    async fn save_with_relations(&self, issue: &mut IssueModel) -> AppResult<()> {
        if let (Some(options), Some(subject)) = (self.subject.as_deref(), issue.subject.get_mut()) {
            self.services.subjects().save_with(subject, options).await?;
        }

        self.services.issues().save(issue).await?;

        let issue_id = issue.id;
        if let (Some(options), Some(quizzes)) = (self.quizzes.as_deref(), issue.quizzes.get_mut()) {
            for quiz in quizzes.iter_mut() {
                quiz.issue.refer_to(issue_id);
            }
            self.services
                .quizzes()
                .save_all_with(quizzes, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, issue: &IssueModel) -> AppResult<()> {
        if let Some(options) = self.quizzes.as_deref() {
            let quizzes = match issue.quizzes.get() {
                Some(quizzes) => quizzes.clone(),
                None => self.services.quizzes().find_by_issue(issue).await?,
            };
            self.services
                .quizzes()
                .delete_all_with(&quizzes, options)
                .await?;
        }

        self.services.issues().delete(issue).await
    }
}
