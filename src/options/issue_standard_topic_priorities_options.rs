//! Topic priorities options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{IssueStandardTopicPriorityModel, Ref},
    services::Services,
};

use super::{IssueStandardsOptions, ModelOptions, TopicsOptions};

#[derive(Clone)]
pub struct IssueStandardTopicPrioritiesOptions {
    services: Services,
    topic: Option<Box<TopicsOptions>>,
    issue_standard: Option<Box<IssueStandardsOptions>>,
}

impl IssueStandardTopicPrioritiesOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            topic: None,
            issue_standard: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_issue_standard(IssueStandardsOptions::for_auth(services))
    }

    pub fn with_topic(mut self, options: TopicsOptions) -> Self {
        self.topic = Some(Box::new(options));
        self
    }

    pub fn with_issue_standard(mut self, options: IssueStandardsOptions) -> Self {
        self.issue_standard = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<IssueStandardTopicPriorityModel> for IssueStandardTopicPrioritiesOptions {
    async fn with_relation(
        &self,
        mut priority: IssueStandardTopicPriorityModel,
    ) -> AppResult<IssueStandardTopicPriorityModel> {
        if let (Some(options), Some(topic_id)) = (self.topic.as_deref(), priority.topic.id()) {
            if let Some(topic) = self.services.topics().find_with(topic_id, options).await? {
                priority.topic = Ref::loaded(topic);
            }
        }
        if let (Some(options), Some(issue_standard_id)) =
            (self.issue_standard.as_deref(), priority.issue_standard.id())
        {
            if let Some(issue_standard) = self
                .services
                .issue_standards()
                .find_with(issue_standard_id, options)
                .await?
            {
                priority.issue_standard = Ref::loaded(issue_standard);
            }
        }

        Ok(priority)
    }

    async fn save_with_relations(
        &self,
        priority: &mut IssueStandardTopicPriorityModel,
    ) -> AppResult<()> {
        if let (Some(options), Some(topic)) = (self.topic.as_deref(), priority.topic.get_mut()) {
            self.services.topics().save_with(topic, options).await?;
        }
        if let (Some(options), Some(issue_standard)) =
            (self.issue_standard.as_deref(), priority.issue_standard.get_mut())
        {
            self.services
                .issue_standards()
                .save_with(issue_standard, options)
                .await?;
        }

        self.services.topic_priorities().save(priority).await
    }

    async fn delete_with_relations(
        &self,
        priority: &IssueStandardTopicPriorityModel,
    ) -> AppResult<()> {
        self.services.topic_priorities().delete(priority).await
    }
}
