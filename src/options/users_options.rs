//! Users options

use async_trait::async_trait;

use crate::{
    error::AppResult,
    models::{Lazy, UserModel},
    services::Services,
};

use super::{ModelOptions, SubjectsOptions};

/// Relations of a user to hydrate or cascade
#[derive(Clone)]
pub struct UsersOptions {
    services: Services,
    subjects: Option<Box<SubjectsOptions>>,
}

impl UsersOptions {
    pub fn new(services: &Services) -> Self {
        Self {
            services: services.clone(),
            subjects: None,
        }
    }

    /// Every subject of the user, with everything below it
    pub fn for_delete(services: &Services) -> Self {
        Self::new(services).with_subjects(SubjectsOptions::for_delete(services))
    }

    pub fn with_subjects(mut self, options: SubjectsOptions) -> Self {
        self.subjects = Some(Box::new(options));
        self
    }
}

#[async_trait]
impl ModelOptions<UserModel> for UsersOptions {
    async fn with_relation(&self, mut user: UserModel) -> AppResult<UserModel> {
        if let Some(options) = self.subjects.as_deref() {
            let subjects = self
                .services
                .subjects()
                .find_by_user_with(&user, options)
                .await?;
            user.subjects = Lazy::Loaded(subjects);
        }

        Ok(user)
    }

    async fn save_with_relations(&self, user: &mut UserModel) -> AppResult<()> {
        self.services.users().save(user).await?;

        let user_id = user.id;
        if let (Some(options), Some(subjects)) = (self.subjects.as_deref(), user.subjects.get_mut())
        {
            for subject in subjects.iter_mut() {
                subject.user.refer_to(user_id);
            }
            self.services
                .subjects()
                .save_all_with(subjects, options)
                .await?;
        }

        Ok(())
    }

    async fn delete_with_relations(&self, user: &UserModel) -> AppResult<()> {
        if let Some(options) = self.subjects.as_deref() {
            let subjects = match user.subjects.get() {
                Some(subjects) => subjects.clone(),
                None => self.services.subjects().find_by_user(user).await?,
            };
            self.services
                .subjects()
                .delete_all_with(&subjects, options)
                .await?;
        }

        self.services.users().delete(user).await
    }
}
