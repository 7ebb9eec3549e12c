//! Subjects options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, Ref, SubjectModel},
    services::Services,
};

use super::{IssueStandardsOptions, IssuesOptions, ModelOptions, TopicsOptions, UsersOptions};

/// Relations of a subject to hydrate or cascade
#[derive(Clone)]
pub struct SubjectsOptions {
    services: Services,
    user: Option<Box<UsersOptions>>,
    topics: Option<Box<TopicsOptions>>,
    issue_standard: Option<Box<IssueStandardsOptions>>,
    issues: Option<Box<IssuesOptions>>,
}

impl SubjectsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            user: None,
            topics: None,
            issue_standard: None,
            issues: None,
        }
    }

    /// Loads the owning user
    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_user(UsersOptions::new(services))
    }

    /// Topics, the issue standard and issues, each with their own dependents
    pub fn for_delete(services: &Services) -> Self {
        Self::new(services)
            .with_topics(TopicsOptions::for_delete(services))
            .with_issue_standard(IssueStandardsOptions::for_delete(services))
            .with_issues(IssuesOptions::for_delete(services))
    }

    pub fn with_user(mut self, options: UsersOptions) -> Self {
        self.user = Some(Box::new(options));
        self
    }

    pub fn with_topics(mut self, options: TopicsOptions) -> Self {
        self.topics = Some(Box::new(options));
        self
    }

    pub fn with_issue_standard(mut self, options: IssueStandardsOptions) -> Self {
        self.issue_standard = Some(Box::new(options));
        self
    }

    pub fn with_issues(mut self, options: IssuesOptions) -> Self {
        self.issues = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<SubjectModel> for SubjectsOptions {
    async fn with_relation(&self, mut subject: SubjectModel) -> AppResult<SubjectModel> {
        if let (Some(options), Some(user_id)) = (self.user.as_deref(), subject.user.id()) {
            if let Some(user) = self.services.users().find_with(user_id, options).await? {
                subject.user = Ref::loaded(user);
            }
        }
        if let Some(options) = self.topics.as_deref() {
            let topics = self
                .services
                .topics()
                .find_by_subject_with(&subject, options)
                .await?;
            subject.topics = Lazy::Loaded(topics);
        }
        if let Some(options) = self.issue_standard.as_deref() {
            let issue_standard = self
                .services
                .issue_standards()
                .find_by_subject_with(&subject, options)
                .await?;
            subject.issue_standard = Lazy::Loaded(issue_standard.map(Box::new));
        }
        if let Some(options) = self.issues.as_deref() {
            let issues = self
                .services
                .issues()
                .find_by_subject_with(&subject, options)
                .await?;
            subject.issues = Lazy::Loaded(issues);
        }

        Ok(subject)
    }

    async fn save_with_relations(&self, subject: &mut SubjectModel) -> AppResult<()> {
        if let (Some(options), Some(user)) = (self.user.as_deref(), subject.user.get_mut()) {
            self.services.users().save_with(user, options).await?;
        }

        self.services.subjects().save(subject).await?;

        let subject_id = subject.id;
        if let (Some(options), Some(topics)) = (self.topics.as_deref(), subject.topics.get_mut()) {
            for topic in topics.iter_mut() {
                topic.subject.refer_to(subject_id);
            }
            self.services.topics().save_all_with(topics, options).await?;
        }
        if let (Some(options), Some(Some(issue_standard))) = (
            self.issue_standard.as_deref(),
            subject.issue_standard.get_mut(),
        ) {
            issue_standard.subject.refer_to(subject_id);
            self.services
                .issue_standards()
                .save_with(issue_standard, options)
                .await?;
        }
        if let (Some(options), Some(issues)) = (self.issues.as_deref(), subject.issues.get_mut()) {
            for issue in issues.iter_mut() {
                issue.subject.refer_to(subject_id);
            }
            self.services.issues().save_all_with(issues, options).await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, subject: &SubjectModel) -> AppResult<()> {
        if let Some(options) = self.topics.as_deref() {
            let topics = match subject.topics.get() {
                Some(topics) => topics.clone(),
                None => self.services.topics().find_by_subject(subject).await?,
            };
            self.services
                .topics()
                .delete_all_with(&topics, options)
                .await?;
        }
        if let Some(options) = self.issue_standard.as_deref() {
            let issue_standard = match subject.issue_standard.get() {
                Some(issue_standard) => issue_standard.as_deref().cloned(),
                None => {
                    self.services
                        .issue_standards()
                        .find_by_subject(subject)
                        .await?
                }
            };
            if let Some(issue_standard) = issue_standard {
                self.services
                    .issue_standards()
                    .delete_with(&issue_standard, options)
                    .await?;
            }
        }
        if let Some(options) = self.issues.as_deref() {
            let issues = match subject.issues.get() {
                Some(issues) => issues.clone(),
                None => self.services.issues().find_by_subject(subject).await?,
            };
            self.services
                .issues()
                .delete_all_with(&issues, options)
                .await?;
        }

        self.services.subjects().delete(subject).await
    }
}
