//! Points options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, PointModel, Ref},
    services::Services,
};

use super::{ModelOptions, QuizzesOptions, SolutionsOptions};

#[derive(Clone)]
pub struct PointsOptions {
    services: Services,
    quiz: Option<Box<QuizzesOptions>>,
    solutions: Option<Box<SolutionsOptions>>,
}

impl PointsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            quiz: None,
            solutions: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_quiz(QuizzesOptions::for_auth(services))
    }

    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_solutions(SolutionsOptions::new(services))
    }

    pub fn with_quiz(mut self, options: QuizzesOptions) -> Self {
        self.quiz = Some(Box::new(options));
        self
    }

    pub fn with_solutions(mut self, options: SolutionsOptions) -> Self {
        self.solutions = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<PointModel> for PointsOptions {
    async fn with_relation(&self, mut point: PointModel) -> AppResult<PointModel> {
        if let (Some(options), Some(quiz_id)) = (self.quiz.as_deref(), point.quiz.id()) {
            if let Some(quiz) = self.services.quizzes().find_with(quiz_id, options).await? {
                point.quiz = Ref::loaded(quiz);
            }
        }
        if let Some(options) = self.solutions.as_deref() {
            let solutions = self
                .services
                .solutions()
                .find_by_point_with(&point, options)
                .await?;
            point.solutions = Lazy::Loaded(solutions);
        }

        Ok(point)
    }

    async fn save_with_relations(&self, point: &mut PointModel) -> AppResult<()> {
        if let (Some(options), Some(quiz)) = (self.quiz.as_deref(), point.quiz.get_mut()) {
            self.services.quizzes().save_with(quiz, options).await?;
        }

        self.services.points().save(point).await?;

        let point_id = point.id;
        if let (Some(options), Some(solutions)) =
            (self.solutions.as_deref(), point.solutions.get_mut())
        {
            for solution in solutions.iter_mut() {
                solution.point.refer_to(point_id);
            }
            self.services
                .solutions()
                .save_all_with(solutions, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, point: &PointModel) -> AppResult<()> {
        if let Some(options) = self.solutions.as_deref() {
            let solutions = match point.solutions.get() {
                Some(solutions) => solutions.clone(),
                None => self.services.solutions().find_by_point(point).await?,
            };
            self.services
                .solutions()
                .delete_all_with(&solutions, options)
                .await?;
        }

        self.services.points().delete(point).await
    }
}
