//! Topics options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, Ref, TopicModel},
    services::Services,
};

use super::{ModelOptions, QuestionsOptions, SubjectsOptions};

/// Relations of a topic to hydrate or cascade
#[derive(Clone)]
pub struct TopicsOptions {
    services: Services,
    subject: Option<Box<SubjectsOptions>>,
    questions: Option<Box<QuestionsOptions>>,
}

impl TopicsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            subject: None,
            questions: None,
        }
    }

    /// Loads subject and owner
    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_subject(SubjectsOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_questions(QuestionsOptions::for_delete(services))
    }

    pub fn with_subject(mut self, options: SubjectsOptions) -> Self {
        self.subject = Some(Box::new(options));
        self
    }

    pub fn with_questions(mut self, options: QuestionsOptions) -> Self {
        self.questions = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<TopicModel> for TopicsOptions {
    async fn with_relation(&self, mut topic: TopicModel) -> AppResult<TopicModel> {
        if let (Some(options), Some(subject_id)) = (self.subject.as_deref(), topic.subject.id()) {
            if let Some(subject) = self
                .services
                .subjects()
                .find_with(subject_id, options)
                .await?
            {
                topic.subject = Ref::loaded(subject);
            }
        }
        if let Some(options) = self.questions.as_deref() {
            let questions = self
                .services
                .questions()
                .find_by_topic_with(&topic, options)
                .await?;
            topic.questions = Lazy::Loaded(questions);
        }

        Ok(topic)
    }

    async fn save_with_relations(&self, topic: &mut TopicModel) -> AppResult<()> {
        if let (Some(options), Some(subject)) = (self.subject.as_deref(), topic.subject.get_mut()) {
            self.services.subjects().save_with(subject, options).await?;
        }

        self.services.topics().save(topic).await?;

        let topic_id = topic.id;
        if let (Some(options), Some(questions)) =
            (self.questions.as_deref(), topic.questions.get_mut())
        {
            for question in questions.iter_mut() {
                question.topic.refer_to(topic_id);
            }
            self.services
                .questions()
                .save_all_with(questions, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, topic: &TopicModel) -> AppResult<()> {
        if let Some(options) = self.questions.as_deref() {
            let questions = match topic.questions.get() {
                Some(questions) => questions.clone(),
                None => self.services.questions().find_by_topic(topic).await?,
            };
            self.services
                .questions()
                .delete_all_with(&questions, options)
                .await?;
        }

        self.services.topics().delete(topic).await
    }
}
