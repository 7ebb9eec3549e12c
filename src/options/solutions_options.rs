//! Solutions options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Ref, SolutionModel},
    services::Services,
};

use super::{AnswersOptions, ModelOptions, PointsOptions};

#[derive(Clone)]
pub struct SolutionsOptions {
    services: Services,
    answer: Option<Box<AnswersOptions>>,
    point: Option<Box<PointsOptions>>,
}

impl SolutionsOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            answer: None,
            point: None,
        }
    }

    pub fn for_auth(services: &Services) -> Self {
        Self::new(services).with_point(PointsOptions::for_auth(services))
    }

    pub fn with_answer(mut self, options: AnswersOptions) -> Self {
        self.answer = Some(Box::new(options));
        self
    }

    pub fn with_point(mut self, options: PointsOptions) -> Self {
        self.point = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<SolutionModel> for SolutionsOptions {
    async fn with_relation(&self, mut solution: SolutionModel) -> AppResult<SolutionModel> {
        if let (Some(options), Some(answer_id)) = (self.answer.as_deref(), solution.answer.id()) {
            if let Some(answer) = self.services.answers().find_with(answer_id, options).await? {
                solution.answer = Ref::loaded(answer);
            }
        }
        if let (Some(options), Some(point_id)) = (self.point.as_deref(), solution.point.id()) {
            if let Some(point) = self.services.points().find_with(point_id, options).await? {
                solution.point = Ref::loaded(point);
            }
        }

        Ok(solution)
    }

    async fn save_with_relations(&self, solution: &mut SolutionModel) -> AppResult<()> {
        if let (Some(options), Some(answer)) = (self.answer.as_deref(), solution.answer.get_mut()) {
            self.services.answers().save_with(answer, options).await?;
        }
        if let (Some(options), Some(point)) = (self.point.as_deref(), solution.point.get_mut()) {
            self.services.points().save_with(point, options).await?;
        }

        self.services.solutions().save(solution).await
    }

    async fn delete_with_relations(&self, solution: &SolutionModel) -> AppResult<()> {
        self.services.solutions().delete(solution).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        db::mappers::MockMappers,
        models::{AnswerModel, PointModel},
    };
    use mockall::Sequence;

    #[tokio::test]
    async fn test_save_persists_answer_and_point_first() {
        let mut mocks = MockMappers::default();
        let mut seq = Sequence::new();
        mocks
            .answers
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entity| {
                entity.id = Some(4);
                Ok(())
            });
        mocks
            .points
            .expect_insert()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entity| {
                entity.id = Some(6);
                Ok(())
            });
        mocks
            .solutions
            .expect_insert()
            .withf(|entity| entity.answer_id == Some(4) && entity.point_id == Some(6))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|entity| {
                entity.id = Some(1);
                Ok(())
            });
        let services = Services::new(mocks.into());
        let options = SolutionsOptions::new(&services)
            .with_answer(AnswersOptions::new(&services))
            .with_point(PointsOptions::new(&services));

        let mut solution = SolutionModel {
            answer: Ref::loaded(AnswerModel::default()),
            point: Ref::loaded(PointModel::default()),
            ..Default::default()
        };
        services
            .solutions()
            .save_with(&mut solution, &options)
            .await
            .unwrap();

        assert_eq!(solution.id, Some(1));
        assert_eq!(solution.answer.id(), Some(4));
    }
}
