//! Model lookups guarded by the access control layer
//!
//! Every lookup loads the ownership chain, turns an absent model into a 404
//! and a foreign one into a 403.

use crate::{
    auth::{AccessControlLayer, Owned},
    error::{AppError, AppResult},
    models::{
        Identified, IssueModel, IssueStandardModel, QuestionModel, QuizModel, SubjectModel,
        TopicModel, UserModel,
    },
    options::{
        AnswersOptions, IssueStandardQuestionTypeOptionsOptions,
        IssueStandardTopicPrioritiesOptions, IssueStandardsOptions, IssuesOptions,
        QuestionsOptions, QuizzesOptions, SubjectsOptions, TopicsOptions,
    },
    services::Services,
};

/// Checks a lookup result against the ACL
pub fn authorized<M: Owned>(
    found: Option<M>,
    acl: &AccessControlLayer,
    kind: &str,
    id: i32,
) -> AppResult<M> {
    let model = found.ok_or_else(|| AppError::NotFound(format!("{kind} {id} not found")))?;
    acl.require_access(&model)?;
    Ok(model)
}

pub async fn user_for(services: &Services, acl: &AccessControlLayer, id: i32) -> AppResult<UserModel> {
    authorized(services.users().find(id).await?, acl, "User", id)
}

pub async fn subject_for(
    services: &Services,
    acl: &AccessControlLayer,
    id: i32,
) -> AppResult<SubjectModel> {
    let subject = services
        .subjects()
        .find_with(id, &SubjectsOptions::for_auth(services))
        .await?;
    authorized(subject, acl, "Subject", id)
}

pub async fn topic_for(services: &Services, acl: &AccessControlLayer, id: i32) -> AppResult<TopicModel> {
    let topic = services
        .topics()
        .find_with(id, &TopicsOptions::for_auth(services))
        .await?;
    authorized(topic, acl, "Topic", id)
}

/// Question with its ownership chain and answers
pub async fn question_for(
    services: &Services,
    acl: &AccessControlLayer,
    id: i32,
) -> AppResult<QuestionModel> {
    let options = QuestionsOptions::for_auth(services)
        .with_question_type()
        .with_answers(AnswersOptions::new(services));
    let question = services.questions().find_with(id, &options).await?;
    authorized(question, acl, "Question", id)
}

/// Issue standard with its ownership chain, priorities and type options
pub async fn issue_standard_for(
    services: &Services,
    acl: &AccessControlLayer,
    id: i32,
) -> AppResult<IssueStandardModel> {
    let issue_standard = services
        .issue_standards()
        .find_with(id, &issue_standard_options(services))
        .await?;
    authorized(issue_standard, acl, "Issue standard", id)
}

pub fn issue_standard_options(services: &Services) -> IssueStandardsOptions {
    IssueStandardsOptions::for_auth(services)
        .with_topic_priorities(IssueStandardTopicPrioritiesOptions::new(services))
        .with_question_type_options(IssueStandardQuestionTypeOptionsOptions::new(services))
}

pub async fn issue_for(services: &Services, acl: &AccessControlLayer, id: i32) -> AppResult<IssueModel> {
    let issue = services
        .issues()
        .find_with(id, &IssuesOptions::for_auth(services))
        .await?;
    authorized(issue, acl, "Issue", id)
}

pub async fn quiz_for(services: &Services, acl: &AccessControlLayer, id: i32) -> AppResult<QuizModel> {
    let quiz = services
        .quizzes()
        .find_with(id, &QuizzesOptions::for_auth(services))
        .await?;
    authorized(quiz, acl, "Quiz", id)
}

/// Rejects ids supplied by the client on creation
pub fn ensure_new(id: Option<i32>) -> AppResult<()> {
    match id {
        Some(_) => Err(AppError::InvalidInput("Id must not be set on creation".to_string())),
        None => Ok(()),
    }
}

/// Requires the id of the model being updated
pub fn require_id(id: Option<i32>) -> AppResult<i32> {
    id.ok_or_else(|| AppError::InvalidInput("Id is required".to_string()))
}

/// Removes the stored child a request refers to, or starts a new one.
///
/// Used when a request replaces a collection of children: whatever is left in
/// `stored` afterwards is no longer referenced and gets deleted.
pub fn take_stored<M>(stored: &mut Vec<M>, id: Option<i32>, kind: &str) -> AppResult<M>
where
    M: Identified + Default,
{
    let Some(id) = id else {
        return Ok(M::default());
    };

    let position = stored
        .iter()
        .position(|model| model.id() == Some(id))
        .ok_or_else(|| AppError::InvalidInput(format!("{kind} {id} does not belong here")))?;

    Ok(stored.swap_remove(position))
}
