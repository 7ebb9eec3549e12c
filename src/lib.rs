//! EasyTests - quiz authoring and delivery backend
//!
//! Teachers build subjects, topics and questions, describe how an issue of
//! questions is drawn through an issue standard, and open quizzes that
//! students join by invite code.
//!
//! # Architecture
//!
//! - **Mappers**: one trait per table, PostgreSQL rows in and out as entities
//! - **Services**: find, save and delete domain models
//! - **Options**: which relations a service call hydrates, saves or cascades
//! - **Handlers**: the `/v1` JSON API and the server-rendered `/personal` pages
//! - **Auth**: JWT login and the owner-or-admin access control layer

pub mod auth;
pub mod config;
pub mod constants;
pub mod db;
pub mod entities;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod options;
pub mod services;
pub mod state;
pub mod utils;
pub mod views;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, AppResult};
pub use state::AppState;
