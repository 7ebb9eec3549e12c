//! Question type handlers (read only)

use axum::{Router, extract::State, routing::get};
use serde::Serialize;

use crate::{
    error::AppResult, handlers::extract::Json, models::QuestionTypeModel, state::AppState,
};

#[derive(Debug, Serialize)]
pub struct QuestionTypeResponse {
    pub id: Option<i32>,
    pub name: String,
}

impl From<&QuestionTypeModel> for QuestionTypeResponse {
    fn from(question_type: &QuestionTypeModel) -> Self {
        Self {
            id: question_type.id,
            name: question_type.name.clone(),
        }
    }
}

/// List all question types
pub async fn list_question_types(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<QuestionTypeResponse>>> {
    let question_types = state.services().question_types().find_all().await?;
    Ok(Json(question_types.iter().map(QuestionTypeResponse::from).collect()))
}

/// Question type routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(list_question_types))
}
