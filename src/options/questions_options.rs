//! Questions options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, QuestionModel, Ref},
    services::Services,
};

use super::{AnswersOptions, ModelOptions, TopicsOptions};

/// Relations of a question to hydrate or cascade.
///
/// The question type is a seeded lookup: it can be loaded but is never saved
/// or deleted through a question.
#[derive(Clone)]
pub struct QuestionsOptions {
    services: Services,
    question_type: bool,
    topic: Option<Box<TopicsOptions>>,
    answers: Option<Box<AnswersOptions>>,
}

impl QuestionsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            question_type: false,
            topic: None,
            answers: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_topic(TopicsOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_answers(AnswersOptions::new(services))
    }

    pub fn with_question_type(mut self) -> Self {
        self.question_type = true;
        self
    }

    pub fn with_topic(mut self, options: TopicsOptions) -> Self {
        self.topic = Some(Box::new(options));
        self
    }

    pub fn with_answers(mut self, options: AnswersOptions) -> Self {
        self.answers = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<QuestionModel> for QuestionsOptions {
    async fn with_relation(&self, mut question: QuestionModel) -> AppResult<QuestionModel> {
        if let (true, Some(question_type_id)) = (self.question_type, question.question_type.id()) {
            if let Some(question_type) = self
                .services
                .question_types()
                .find(question_type_id)
                .await?
            {
                question.question_type = Ref::loaded(question_type);
            }
        }
        if let (Some(options), Some(topic_id)) = (self.topic.as_deref(), question.topic.id()) {
            if let Some(topic) = self.services.topics().find_with(topic_id, options).await? {
                question.topic = Ref::loaded(topic);
            }
        }
        if let Some(options) = self.answers.as_deref() {
            let answers = self
                .services
                .answers()
                .find_by_question_with(&question, options)
                .await?;
            question.answers = Lazy::Loaded(answers);
        }

        Ok(question)
    }

    async fn save_with_relations(&self, question: &mut QuestionModel) -> AppResult<()> {
        if let (Some(options), Some(topic)) = (self.topic.as_deref(), question.topic.get_mut()) {
            self.services.topics().save_with(topic, options).await?;
        }

        self.services.questions().save(question).await?;

        let question_id = question.id;
        if let (Some(options), Some(answers)) = (self.answers.as_deref(), question.answers.get_mut())
        {
            for answer in answers.iter_mut() {
                answer.question.refer_to(question_id);
            }
            self.services
                .answers()
                .save_all_with(answers, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, question: &QuestionModel) -> AppResult<()> {
        if let Some(options) = self.answers.as_deref() {
            let answers = match question.answers.get() {
                Some(answers) => answers.clone(),
                None => self.services.answers().find_by_question(question).await?,
            };
            self.services
                .answers()
                .delete_all_with(&answers, options)
                .await?;
        }

        self.services.questions().delete(question).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::mappers::MockMappers,
        entities::{AnswerEntity, QuestionEntity, QuestionTypeEntity},
        models::AnswerModel,
    };
    use mockall::Sequence;

    fn question_entity() -> QuestionEntity {
        QuestionEntity {
            id: Some(8),
            text: "2 + 2?".to_string(),
            question_type_id: Some(1),
            topic_id: Some(4),
        }
    }

    #[tokio::test]
    async fn test_loads_question_type_and_answers() {
        let mut mocks = MockMappers::default();
        mocks.question_types.expect_find().returning(|id| {
            Ok(Some(QuestionTypeEntity {
                id: Some(id),
                name: "One of many".to_string(),
            }))
        });
        mocks
            .answers
            .expect_find_by_question_id()
            .withf(|question_id| *question_id == 8)
            .returning(|question_id| {
                Ok(vec![AnswerEntity {
                    id: Some(1),
                    txt: "4".to_string(),
                    serial_number: 1,
                    is_right: true,
                    question_id: Some(question_id),
                }])
            });
        let services = Services::new(mocks.into());
        let options = QuestionsOptions::new(&services)
            .with_question_type()
            .with_answers(AnswersOptions::new(&services));

        let question = options
            .with_relation(QuestionModel::from(question_entity()))
            .await
            .unwrap();

        assert_eq!(question.question_type.get().unwrap().name, "One of many");
        assert_eq!(question.answers.as_slice().len(), 1);
        assert!(question.answers.as_slice()[0].right);
        assert_eq!(question.topic, Ref::Empty(4));
    }

    #[tokio::test]
    async fn test_delete_removes_loaded_answers_first() {
        let mut mocks = MockMappers::default();
        let mut seq = Sequence::new();
        for answer_id in [1, 2] {
            mocks
                .answers
                .expect_delete()
                .withf(move |entity| entity.id == Some(answer_id))
                .times(1)
                .in_sequence(&mut seq)
                .returning(|_| Ok(()));
        }
        mocks
            .questions
            .expect_delete()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        mocks.answers.expect_find_by_question_id().never();
        let services = Services::new(mocks.into());

        let mut question = QuestionModel::from(question_entity());
        question.answers = Lazy::Loaded(vec![
            AnswerModel {
                id: Some(1),
                ..Default::default()
            },
            AnswerModel {
                id: Some(2),
                ..Default::default()
            },
        ]);

        services
            .questions()
            .delete_with(&question, &QuestionsOptions::for_delete(&services))
            .await
            .unwrap();
    }
}
