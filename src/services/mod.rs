//! Business logic services
//!
//! Each service converts between one entity and its model and talks to its
//! mapper. Relation handling is delegated to the options passed in.

mod macros;

pub mod answers_service;
pub mod auth_service;
pub mod issue_standard_question_type_options_service;
pub mod issue_standard_topic_priorities_service;
pub mod issue_standards_service;
pub mod issues_service;
pub mod points_service;
pub mod question_types_service;
pub mod questions_service;
pub mod quizzes_service;
pub mod solutions_service;
pub mod subjects_service;
pub mod topics_service;
pub mod users_service;

use std::sync::Arc;

use crate::db::Mappers;

pub use answers_service::AnswersService;
pub use auth_service::AuthService;
pub use issue_standard_question_type_options_service::IssueStandardQuestionTypeOptionsService;
pub use issue_standard_topic_priorities_service::IssueStandardTopicPrioritiesService;
pub use issue_standards_service::IssueStandardsService;
pub use issues_service::IssuesService;
pub use points_service::PointsService;
pub use question_types_service::QuestionTypesService;
pub use questions_service::QuestionsService;
pub use quizzes_service::QuizzesService;
pub use solutions_service::SolutionsService;
pub use subjects_service::SubjectsService;
pub use topics_service::TopicsService;
pub use users_service::UsersService;

/// Registry of all services (cheap to clone)
#[derive(Clone)]
pub struct Services {
    inner: Arc<ServicesInner>,
}

struct ServicesInner {
    users: UsersService,
    subjects: SubjectsService,
    topics: TopicsService,
    question_types: QuestionTypesService,
    questions: QuestionsService,
    answers: AnswersService,
    issue_standards: IssueStandardsService,
    topic_priorities: IssueStandardTopicPrioritiesService,
    question_type_options: IssueStandardQuestionTypeOptionsService,
    issues: IssuesService,
    quizzes: QuizzesService,
    points: PointsService,
    solutions: SolutionsService,
}

impl Services {
    pub fn new(mappers: Mappers) -> Self {
        Self {
            inner: Arc::new(ServicesInner {
                users: UsersService::new(mappers.users),
                subjects: SubjectsService::new(mappers.subjects),
                topics: TopicsService::new(mappers.topics),
                question_types: QuestionTypesService::new(mappers.question_types),
                questions: QuestionsService::new(mappers.questions),
                answers: AnswersService::new(mappers.answers),
                issue_standards: IssueStandardsService::new(mappers.issue_standards),
                topic_priorities: IssueStandardTopicPrioritiesService::new(mappers.topic_priorities),
                question_type_options: IssueStandardQuestionTypeOptionsService::new(
                    mappers.question_type_options,
                ),
                issues: IssuesService::new(mappers.issues),
                quizzes: QuizzesService::new(mappers.quizzes),
                points: PointsService::new(mappers.points),
                solutions: SolutionsService::new(mappers.solutions),
            }),
        }
    }

    pub fn users(&self) -> &UsersService {
        &self.inner.users
    }

    pub fn subjects(&self) -> &SubjectsService {
        &self.inner.subjects
    }

    pub fn topics(&self) -> &TopicsService {
        &self.inner.topics
    }

    pub fn question_types(&self) -> &QuestionTypesService {
        &self.inner.question_types
    }

    pub fn questions(&self) -> &QuestionsService {
        &self.inner.questions
    }

    pub fn answers(&self) -> &AnswersService {
        &self.inner.answers
    }

    pub fn issue_standards(&self) -> &IssueStandardsService {
        &self.inner.issue_standards
    }

    pub fn topic_priorities(&self) -> &IssueStandardTopicPrioritiesService {
        &self.inner.topic_priorities
    }

    pub fn question_type_options(&self) -> &IssueStandardQuestionTypeOptionsService {
        &self.inner.question_type_options
    }

    pub fn issues(&self) -> &IssuesService {
        &self.inner.issues
    }

    pub fn quizzes(&self) -> &QuizzesService {
        &self.inner.quizzes
    }

    pub fn points(&self) -> &PointsService {
        &self.inner.points
    }

    pub fn solutions(&self) -> &SolutionsService {
        &self.inner.solutions
    }
}
