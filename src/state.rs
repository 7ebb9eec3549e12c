//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{config::Config, services::Services, views::Views};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Service registry backed by the mappers
    services: Services,

    /// Compiled templates of the personal area
    views: Views,

    /// Application configuration
    config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(services: Services, views: Views, config: Config) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                services,
                views,
                config,
            }),
        }
    }

    pub fn services(&self) -> &Services {
        &self.inner.services
    }

    pub fn views(&self) -> &Views {
        &self.inner.views
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
