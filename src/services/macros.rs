//! Shared shape of the per-model services
//!
//! Every service wraps one mapper and offers the same find, save and delete
//! contract. `model_service!` generates that contract; `children_lookup!`
//! adds the `find_by_<parent>` pair for a reverse relation.

/// Service struct over `$mapper`, mapping `$entity` rows to `$model`s.
///
/// `save` inserts a transient model (copying the new id back) and updates a
/// persisted one. `delete` and `delete_with` refuse models without an id.
/// The `_with` variants hand relation work to the options.
macro_rules! model_service {
    (
        $(#[$meta:meta])*
        $service:ident($mapper:ident) for $entity:ident => $model:ident
    ) => {
        $(#[$meta])*
        pub struct $service {
            mapper: std::sync::Arc<dyn $mapper>,
        }

        impl $service {
            pub fn new(mapper: std::sync::Arc<dyn $mapper>) -> Self {
                Self { mapper }
            }

            /// Find by id, without relations
            pub async fn find(&self, id: i32) -> $crate::error::AppResult<Option<$model>> {
                Ok(self.mapper.find(id).await?.map($model::from))
            }

            /// Find by id and hydrate through `options`
            pub async fn find_with(
                &self,
                id: i32,
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<Option<$model>> {
                match self.find(id).await? {
                    Some(model) => options.with_relation(model).await.map(Some),
                    None => Ok(None),
                }
            }

            pub async fn find_all(&self) -> $crate::error::AppResult<Vec<$model>> {
                let entities = self.mapper.find_all().await?;

                Ok(entities.into_iter().map($model::from).collect())
            }

            /// List every row, hydrated in one batch
            pub async fn find_all_with(
                &self,
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<Vec<$model>> {
                let models = self.find_all().await?;
                options.with_relations(models).await
            }

            pub async fn save(&self, model: &mut $model) -> $crate::error::AppResult<()> {
                let mut entity = $entity::from(&*model);
                match model.id {
                    None => {
                        self.mapper.insert(&mut entity).await?;
                        model.id = entity.id;
                    }
                    Some(_) => self.mapper.update(&entity).await?,
                }

                Ok(())
            }

            /// Save through `options`, which order the relations around the model
            pub async fn save_with(
                &self,
                model: &mut $model,
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<()> {
                options.save_with_relations(model).await
            }

            pub async fn save_all(&self, models: &mut [$model]) -> $crate::error::AppResult<()> {
                for model in models.iter_mut() {
                    self.save(model).await?;
                }

                Ok(())
            }

            pub async fn save_all_with(
                &self,
                models: &mut [$model],
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<()> {
                for model in models.iter_mut() {
                    self.save_with(model, options).await?;
                }

                Ok(())
            }

            pub async fn delete(&self, model: &$model) -> $crate::error::AppResult<()> {
                if model.id.is_none() {
                    return Err($crate::error::AppError::DeleteUnidentifiedModel);
                }

                self.mapper.delete(&$entity::from(model)).await
            }

            /// Delete together with the dependents `options` selects
            pub async fn delete_with(
                &self,
                model: &$model,
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<()> {
                if model.id.is_none() {
                    return Err($crate::error::AppError::DeleteUnidentifiedModel);
                }

                options.delete_with_relations(model).await
            }

            pub async fn delete_all(&self, models: &[$model]) -> $crate::error::AppResult<()> {
                for model in models {
                    self.delete(model).await?;
                }

                Ok(())
            }

            pub async fn delete_all_with(
                &self,
                models: &[$model],
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<()> {
                for model in models {
                    self.delete_with(model, options).await?;
                }

                Ok(())
            }
        }
    };
}

/// `find_by_<parent>` and its hydrating twin, keyed by the parent's id.
///
/// An unidentified parent has no children and the mapper is not asked.
macro_rules! children_lookup {
    (
        $service:ident => $model:ident,
        $(#[$meta:meta])*
        $find_by:ident / $find_by_with:ident ($parent:ident: $parent_model:ident) via $mapper_fn:ident
    ) => {
        impl $service {
            $(#[$meta])*
            pub async fn $find_by(
                &self,
                $parent: &$parent_model,
            ) -> $crate::error::AppResult<Vec<$model>> {
                let Some(parent_id) = $parent.id else {
                    return Ok(Vec::new());
                };
                let entities = self.mapper.$mapper_fn(parent_id).await?;

                Ok(entities.into_iter().map($model::from).collect())
            }

            pub async fn $find_by_with(
                &self,
                $parent: &$parent_model,
                options: &dyn $crate::options::ModelOptions<$model>,
            ) -> $crate::error::AppResult<Vec<$model>> {
                let models = self.$find_by($parent).await?;
                options.with_relations(models).await
            }
        }
    };
}

pub(crate) use children_lookup;
pub(crate) use model_service;
