//! Questions service

use crate::{
    db::mappers::QuestionsMapper,
    entities::QuestionEntity,
    models::{QuestionModel, TopicModel},
};

use super::macros::{children_lookup, model_service};

model_service! {
    /// Finds, saves and deletes question models
    QuestionsService(QuestionsMapper) for QuestionEntity => QuestionModel
}

children_lookup! {
    QuestionsService => QuestionModel,
    /// List the questions of a topic
    find_by_topic / find_by_topic_with(topic: TopicModel) via find_by_topic_id
}
