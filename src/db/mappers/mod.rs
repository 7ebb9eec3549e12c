//! Mappers
//!
//! One trait per table with a PostgreSQL implementation. Services only see
//! the traits, which keeps them testable against mocks.

pub mod answers;
pub mod issue_standard_question_type_options;
pub mod issue_standard_topic_priorities;
pub mod issue_standards;
pub mod issues;
pub mod points;
pub mod question_types;
pub mod questions;
pub mod quizzes;
pub mod solutions;
pub mod subjects;
pub mod topics;
pub mod users;

use std::sync::Arc;

use sqlx::PgPool;

pub use answers::{AnswersMapper, PgAnswersMapper};
pub use issue_standard_question_type_options::{
    IssueStandardQuestionTypeOptionsMapper, PgIssueStandardQuestionTypeOptionsMapper,
};
pub use issue_standard_topic_priorities::{
    IssueStandardTopicPrioritiesMapper, PgIssueStandardTopicPrioritiesMapper,
};
pub use issue_standards::{IssueStandardsMapper, PgIssueStandardsMapper};
pub use issues::{IssuesMapper, PgIssuesMapper};
pub use points::{PgPointsMapper, PointsMapper};
pub use question_types::{PgQuestionTypesMapper, QuestionTypesMapper};
pub use questions::{PgQuestionsMapper, QuestionsMapper};
pub use quizzes::{PgQuizzesMapper, QuizzesMapper};
pub use solutions::{PgSolutionsMapper, SolutionsMapper};
pub use subjects::{PgSubjectsMapper, SubjectsMapper};
pub use topics::{PgTopicsMapper, TopicsMapper};
pub use users::{PgUsersMapper, UsersMapper};

/// Every mapper the service layer needs
#[derive(Clone)]
pub struct Mappers {
    pub users: Arc<dyn UsersMapper>,
    pub subjects: Arc<dyn SubjectsMapper>,
    pub topics: Arc<dyn TopicsMapper>,
    pub question_types: Arc<dyn QuestionTypesMapper>,
    pub questions: Arc<dyn QuestionsMapper>,
    pub answers: Arc<dyn AnswersMapper>,
    pub issue_standards: Arc<dyn IssueStandardsMapper>,
    pub topic_priorities: Arc<dyn IssueStandardTopicPrioritiesMapper>,
    pub question_type_options: Arc<dyn IssueStandardQuestionTypeOptionsMapper>,
    pub issues: Arc<dyn IssuesMapper>,
    pub quizzes: Arc<dyn QuizzesMapper>,
    pub points: Arc<dyn PointsMapper>,
    pub solutions: Arc<dyn SolutionsMapper>,
}

impl Mappers {
    /// Mappers sharing one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        Self {
            users: Arc::new(PgUsersMapper::new(pool.clone())),
            subjects: Arc::new(PgSubjectsMapper::new(pool.clone())),
            topics: Arc::new(PgTopicsMapper::new(pool.clone())),
            question_types: Arc::new(PgQuestionTypesMapper::new(pool.clone())),
            questions: Arc::new(PgQuestionsMapper::new(pool.clone())),
            answers: Arc::new(PgAnswersMapper::new(pool.clone())),
            issue_standards: Arc::new(PgIssueStandardsMapper::new(pool.clone())),
            topic_priorities: Arc::new(PgIssueStandardTopicPrioritiesMapper::new(pool.clone())),
            question_type_options: Arc::new(PgIssueStandardQuestionTypeOptionsMapper::new(
                pool.clone(),
            )),
            issues: Arc::new(PgIssuesMapper::new(pool.clone())),
            quizzes: Arc::new(PgQuizzesMapper::new(pool.clone())),
            points: Arc::new(PgPointsMapper::new(pool.clone())),
            solutions: Arc::new(PgSolutionsMapper::new(pool)),
        }
    }
}

#[cfg(test)]
pub use test_support::*;

#[cfg(test)]
mod test_support {
    use super::*;
    use answers::MockAnswersMapper;
    use issue_standard_question_type_options::MockIssueStandardQuestionTypeOptionsMapper;
    use issue_standard_topic_priorities::MockIssueStandardTopicPrioritiesMapper;
    use issue_standards::MockIssueStandardsMapper;
    use issues::MockIssuesMapper;
    use points::MockPointsMapper;
    use question_types::MockQuestionTypesMapper;
    use questions::MockQuestionsMapper;
    use quizzes::MockQuizzesMapper;
    use solutions::MockSolutionsMapper;
    use subjects::MockSubjectsMapper;
    use topics::MockTopicsMapper;
    use users::MockUsersMapper;

    /// Mock mappers with no expectations; tests replace the ones they exercise
    pub struct MockMappers {
        pub users: MockUsersMapper,
        pub subjects: MockSubjectsMapper,
        pub topics: MockTopicsMapper,
        pub question_types: MockQuestionTypesMapper,
        pub questions: MockQuestionsMapper,
        pub answers: MockAnswersMapper,
        pub issue_standards: MockIssueStandardsMapper,
        pub topic_priorities: MockIssueStandardTopicPrioritiesMapper,
        pub question_type_options: MockIssueStandardQuestionTypeOptionsMapper,
        pub issues: MockIssuesMapper,
        pub quizzes: MockQuizzesMapper,
        pub points: MockPointsMapper,
        pub solutions: MockSolutionsMapper,
    }

    impl Default for MockMappers {
        fn default() -> Self {
            Self {
                users: MockUsersMapper::new(),
                subjects: MockSubjectsMapper::new(),
                topics: MockTopicsMapper::new(),
                question_types: MockQuestionTypesMapper::new(),
                questions: MockQuestionsMapper::new(),
                answers: MockAnswersMapper::new(),
                issue_standards: MockIssueStandardsMapper::new(),
                topic_priorities: MockIssueStandardTopicPrioritiesMapper::new(),
                question_type_options: MockIssueStandardQuestionTypeOptionsMapper::new(),
                issues: MockIssuesMapper::new(),
                quizzes: MockQuizzesMapper::new(),
                points: MockPointsMapper::new(),
                solutions: MockSolutionsMapper::new(),
            }
        }
    }

    impl From<MockMappers> for Mappers {
        fn from(mocks: MockMappers) -> Self {
            Self {
                users: Arc::new(mocks.users),
                subjects: Arc::new(mocks.subjects),
                topics: Arc::new(mocks.topics),
                question_types: Arc::new(mocks.question_types),
                questions: Arc::new(mocks.questions),
                answers: Arc::new(mocks.answers),
                issue_standards: Arc::new(mocks.issue_standards),
                topic_priorities: Arc::new(mocks.topic_priorities),
                question_type_options: Arc::new(mocks.question_type_options),
                issues: Arc::new(mocks.issues),
                quizzes: Arc::new(mocks.quizzes),
                points: Arc::new(mocks.points),
                solutions: Arc::new(mocks.solutions),
            }
        }
    }
}
