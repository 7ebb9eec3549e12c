//! Form DTOs of the personal area

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::{
    constants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH, MAX_QUESTION_TEXT_LENGTH},
    models::{QuestionModel, SubjectModel, TopicModel},
};

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct SubjectForm {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name must not be empty"))]
    pub name: String,

    #[validate(length(max = MAX_DESCRIPTION_LENGTH, message = "Description is too long"))]
    pub description: String,
}

impl From<&SubjectModel> for SubjectForm {
    fn from(subject: &SubjectModel) -> Self {
        Self {
            id: subject.id,
            name: subject.name.clone(),
            description: subject.description.clone(),
        }
    }
}

impl SubjectForm {
    pub fn apply(self, subject: &mut SubjectModel) {
        subject.name = self.name;
        subject.description = self.description;
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct TopicForm {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_NAME_LENGTH, message = "Name must not be empty"))]
    pub name: String,
}

impl From<&TopicModel> for TopicForm {
    fn from(topic: &TopicModel) -> Self {
        Self {
            id: topic.id,
            name: topic.name.clone(),
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize, Validate)]
#[serde(default, rename_all = "camelCase")]
pub struct QuestionForm {
    pub id: Option<i32>,

    #[validate(length(min = 1, max = MAX_QUESTION_TEXT_LENGTH, message = "Text must not be empty"))]
    pub text: String,

    #[validate(range(min = 1, message = "Choose a question type"))]
    pub question_type_id: i32,
}

impl From<&QuestionModel> for QuestionForm {
    fn from(question: &QuestionModel) -> Self {
        Self {
            id: question.id,
            text: question.text.clone(),
            question_type_id: question.question_type.id().unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{QuestionTypeModel, Ref};

    #[test]
    fn test_question_form_defaults_are_invalid() {
        let errors = QuestionForm::default().validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("text"));
        assert!(fields.contains_key("question_type_id"));
    }

    #[test]
    fn test_question_form_from_model() {
        let question = QuestionModel {
            id: Some(4),
            text: "Why?".to_string(),
            question_type: Ref::loaded(QuestionTypeModel {
                id: Some(2),
                name: "Many of many".to_string(),
            }),
            ..Default::default()
        };

        let form = QuestionForm::from(&question);

        assert_eq!(form.id, Some(4));
        assert_eq!(form.question_type_id, 2);
        assert!(form.validate().is_ok());
    }
}
