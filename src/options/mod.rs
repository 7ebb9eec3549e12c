//! Relation options
//!
//! An options value decides, for a single service call, which relations of a
//! model are hydrated on read and which are cascaded on save or delete.
//!
//! Every implementation follows the same ordering:
//!
//! - save: selected parents first, then the model, then selected children
//!   (after their back-reference points at the model)
//! - delete: selected children first, then the model; parents are never
//!   deleted
//! - hydrate: a missing parent leaves the reference empty
//!
//! `for_auth` constructors load the ownership chain the access control
//! layer walks, `for_delete` constructors select every dependent row.

pub mod answers_options;
pub mod issue_standard_question_type_options_options;
pub mod issue_standard_topic_priorities_options;
pub mod issue_standards_options;
pub mod issues_options;
pub mod points_options;
pub mod questions_options;
pub mod quizzes_options;
pub mod solutions_options;
pub mod subjects_options;
pub mod topics_options;
pub mod users_options;

use async_trait::async_trait;
use futures::future::try_join_all;

use crate::error::AppResult;

pub use answers_options::AnswersOptions;
pub use issue_standard_question_type_options_options::IssueStandardQuestionTypeOptionsOptions;
pub use issue_standard_topic_priorities_options::IssueStandardTopicPrioritiesOptions;
pub use issue_standards_options::IssueStandardsOptions;
pub use issues_options::IssuesOptions;
pub use points_options::PointsOptions;
pub use questions_options::QuestionsOptions;
pub use quizzes_options::QuizzesOptions;
pub use solutions_options::SolutionsOptions;
pub use subjects_options::SubjectsOptions;
pub use topics_options::TopicsOptions;
pub use users_options::UsersOptions;

/// Relation strategy for models of type `M`
#[async_trait]
pub trait ModelOptions<M>: Send + Sync
where
    M: Send + Sync + 'static,
{
    /// Hydrate the selected relations of one model
    async fn with_relation(&self, model: M) -> AppResult<M>;

    /// Hydrate a batch; models are processed concurrently
    async fn with_relations(&self, models: Vec<M>) -> AppResult<Vec<M>> {
        try_join_all(models.into_iter().map(|model| self.with_relation(model))).await
    }

    /// Save the model and its selected relations
    async fn save_with_relations(&self, model: &mut M) -> AppResult<()>;

    /// Delete the model after its selected dependents
    async fn delete_with_relations(&self, model: &M) -> AppResult<()>;
}
