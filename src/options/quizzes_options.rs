//! Quizzes options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, QuizModel, Ref},
    services::Services,
};

use super::{IssuesOptions, ModelOptions, PointsOptions};

/// Relations of a quiz to hydrate or cascade
#[derive(Clone)]
pub struct QuizzesOptions {
    services: Services,
    issue: Option<Box<IssuesOptions>>,
    points: Option<Box<PointsOptions>>,
}

impl QuizzesOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            issue: None,
            points: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_issue(IssuesOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_points(PointsOptions::for_delete(services))
    }

    pub fn with_issue(mut self, options: IssuesOptions) -> Self {
        self.issue = Some(Box::new(options));
        self
    }

    pub fn with_points(mut self, options: PointsOptions) -> Self {
        self.points = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<QuizModel> for QuizzesOptions {
    async fn with_relation(&self, mut quiz: QuizModel) -> AppResult<QuizModel> {
        if let (Some(options), Some(issue_id)) = (self.issue.as_deref(), quiz.issue.id()) {
            if let Some(issue) = self.services.issues().find_with(issue_id, options).await? {
                quiz.issue = Ref::loaded(issue);
            }
        }
        if let Some(options) = self.points.as_deref() {
            let points = self
                .services
                .points()
                .find_by_quiz_with(&quiz, options)
                .await?;
            quiz.points = Lazy::Loaded(points);
        }

        Ok(quiz)
    }

    async fn save_with_relations(&self, quiz: &mut QuizModel) -> AppResult<()> {
        if let (Some(options), Some(issue)) = (self.issue.as_deref(), quiz.issue.get_mut()) {
            self.services.issues().save_with(issue, options).await?;
        }

        self.services.quizzes().save(quiz).await?;

        let quiz_id = quiz.id;
        if let (Some(options), Some(points)) = (self.points.as_deref(), quiz.points.get_mut()) {
            for point in points.iter_mut() {
                point.quiz.refer_to(quiz_id);
            }
            self.services.points().save_all_with(points, options).await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, quiz: &QuizModel) -> AppResult<()> {
        if let Some(options) = self.points.as_deref() {
            let points = match quiz.points.get() {
                Some(points) => points.clone(),
                None => self.services.points().find_by_quiz(quiz).await?,
            };
            self.services
                .points()
                .delete_all_with(&points, options)
                .await?;
        }

        self.services.quizzes().delete(quiz).await
    }
}
