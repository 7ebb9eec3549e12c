//! Access control layer
//!
//! Access is granted to administrators and to the user owning a model.
//! Ownership is resolved through loaded relations only, so callers load the
//! chain with the matching `for_auth` options first. A model whose chain is
//! not loaded belongs to nobody.

use axum::{extract::FromRequestParts, http::request::Parts};

use crate::{
    error::{AppError, AppResult},
    middleware::AuthenticatedUser,
    models::{
        AnswerModel, IssueModel, IssueStandardModel, IssueStandardQuestionTypeOptionModel,
        IssueStandardTopicPriorityModel, PointModel, QuestionModel, QuizModel, SolutionModel,
        SubjectModel, TopicModel, UserModel,
    },
};

/// A model that belongs to a user
pub trait Owned {
    /// Id of the owning user, if it can be resolved from what is loaded
    fn owner_id(&self) -> Option<i32>;
}

impl Owned for UserModel {
    fn owner_id(&self) -> Option<i32> {
        self.id
    }
}

impl Owned for SubjectModel {
    fn owner_id(&self) -> Option<i32> {
        self.user.id()
    }
}

impl Owned for TopicModel {
    fn owner_id(&self) -> Option<i32> {
        self.subject.get()?.owner_id()
    }
}

impl Owned for QuestionModel {
    fn owner_id(&self) -> Option<i32> {
        self.topic.get()?.owner_id()
    }
}

impl Owned for AnswerModel {
    fn owner_id(&self) -> Option<i32> {
        self.question.get()?.owner_id()
    }
}

impl Owned for IssueStandardModel {
    fn owner_id(&self) -> Option<i32> {
        self.subject.get()?.owner_id()
    }
}

impl Owned for IssueStandardTopicPriorityModel {
    fn owner_id(&self) -> Option<i32> {
        self.issue_standard.get()?.owner_id()
    }
}

impl Owned for IssueStandardQuestionTypeOptionModel {
    fn owner_id(&self) -> Option<i32> {
        self.issue_standard.get()?.owner_id()
    }
}

impl Owned for IssueModel {
    fn owner_id(&self) -> Option<i32> {
        self.subject.get()?.owner_id()
    }
}

impl Owned for QuizModel {
    fn owner_id(&self) -> Option<i32> {
        self.issue.get()?.owner_id()
    }
}

impl Owned for PointModel {
    fn owner_id(&self) -> Option<i32> {
        self.quiz.get()?.owner_id()
    }
}

impl Owned for SolutionModel {
    fn owner_id(&self) -> Option<i32> {
        self.point.get()?.owner_id()
    }
}

/// Per-request access checks for the authenticated user
#[derive(Debug, Clone)]
pub struct AccessControlLayer {
    user: AuthenticatedUser,
}

impl AccessControlLayer {
    pub fn new(user: AuthenticatedUser) -> Self {
        Self { user }
    }

    pub fn user(&self) -> &AuthenticatedUser {
        &self.user
    }

    pub fn has_access<M: Owned>(&self, model: &M) -> bool {
        self.user.is_admin || model.owner_id() == Some(self.user.id)
    }

    pub fn require_access<M: Owned>(&self, model: &M) -> AppResult<()> {
        if self.has_access(model) {
            Ok(())
        } else {
            tracing::debug!(user_id = self.user.id, owner_id = ?model.owner_id(), "Access denied");
            Err(AppError::Forbidden("Access denied".to_string()))
        }
    }

    pub fn require_admin(&self) -> AppResult<()> {
        if self.user.is_admin {
            Ok(())
        } else {
            Err(AppError::Forbidden("Administrator role required".to_string()))
        }
    }
}

impl<S> FromRequestParts<S> for AccessControlLayer
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        AuthenticatedUser::from_request_parts(parts, state)
            .await
            .map(Self::new)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Ref;

    fn acl(id: i32, is_admin: bool) -> AccessControlLayer {
        AccessControlLayer::new(AuthenticatedUser {
            id,
            email: format!("user{id}@example.com"),
            is_admin,
        })
    }

    fn answer_owned_by(user_id: i32) -> AnswerModel {
        let subject = SubjectModel {
            id: Some(1),
            user: Ref::Empty(user_id),
            ..Default::default()
        };
        let topic = TopicModel {
            id: Some(2),
            subject: Ref::loaded(subject),
            ..Default::default()
        };
        let question = QuestionModel {
            id: Some(3),
            topic: Ref::loaded(topic),
            ..Default::default()
        };
        AnswerModel {
            id: Some(4),
            question: Ref::loaded(question),
            ..Default::default()
        }
    }

    #[test]
    fn test_owner_resolved_through_loaded_chain() {
        let answer = answer_owned_by(7);

        assert_eq!(answer.owner_id(), Some(7));
        assert!(acl(7, false).has_access(&answer));
        assert!(!acl(8, false).has_access(&answer));
    }

    #[test]
    fn test_admin_has_access_to_everything() {
        let topic = TopicModel {
            id: Some(2),
            subject: Ref::Empty(1),
            ..Default::default()
        };

        assert!(acl(1, true).has_access(&topic));
        assert!(acl(1, true).has_access(&answer_owned_by(99)));
    }

    #[test]
    fn test_unloaded_chain_denies_non_admin() {
        let topic = TopicModel {
            id: Some(2),
            subject: Ref::Empty(1),
            ..Default::default()
        };

        assert_eq!(topic.owner_id(), None);
        assert!(matches!(
            acl(1, false).require_access(&topic),
            Err(AppError::Forbidden(_))
        ));
    }

    #[test]
    fn test_user_owns_itself() {
        let user = UserModel {
            id: Some(3),
            ..Default::default()
        };

        assert!(acl(3, false).require_access(&user).is_ok());
        assert!(acl(4, false).require_admin().is_err());
    }
}
