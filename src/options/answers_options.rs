//! Answers options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{AnswerModel, Ref},
    services::Services,
};

use super::{ModelOptions, QuestionsOptions};

/// Relations of an answer to hydrate or cascade
#[derive(Clone)]
pub struct AnswersOptions {
    services: Services,
    question: Option<Box<QuestionsOptions>>,
}

impl AnswersOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            question: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_question(QuestionsOptions::for_auth(services))
    }

    pub fn with_question(mut self, options: QuestionsOptions) -> Self {
        self.question = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<AnswerModel> for AnswersOptions {
    async fn with_relation(&self, mut answer: AnswerModel) -> AppResult<AnswerModel> {
        if let (Some(options), Some(question_id)) = (self.question.as_deref(), answer.question.id())
        {
            if let Some(question) = self
                .services
                .questions()
                .find_with(question_id, options)
                .await?
            {
                answer.question = Ref::loaded(question);
            }
        }

        Ok(answer)
    }

    async fn save_with_relations(&self, answer: &mut AnswerModel) -> AppResult<()> {
        if let (Some(options), Some(question)) =
            (self.question.as_deref(), answer.question.get_mut())
        {
            self.services
                .questions()
                .save_with(question, options)
                .await?;
        }

        self.services.answers().save(answer).await
    }

    async fn delete_with_relations(&self, answer: &AnswerModel) -> AppResult<()> {
        self.services.answers().delete(answer).await
    }
}
