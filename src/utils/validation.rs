//! Validation helpers

use std::collections::BTreeMap;

use validator::ValidationErrors;

/// Human readable messages per field, for re-rendering a form
pub fn field_messages(errors: &ValidationErrors) -> BTreeMap<String, Vec<String>> {
    errors
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let messages = errors
                .iter()
                .map(|error| match &error.message {
                    Some(message) => message.to_string(),
                    None => format!("Invalid value ({})", error.code),
                })
                .collect();
            (field.to_string(), messages)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Form {
        #[validate(length(min = 1, message = "Name is required"))]
        name: String,
        #[validate(range(min = 1))]
        count: i32,
    }

    #[test]
    fn test_messages_are_keyed_by_field() {
        let errors = Form {
            name: String::new(),
            count: 0,
        }
        .validate()
        .unwrap_err();

        let messages = field_messages(&errors);

        assert_eq!(messages["name"], vec!["Name is required".to_string()]);
        assert_eq!(messages["count"], vec!["Invalid value (range)".to_string()]);
    }

    #[test]
    fn test_valid_input_has_no_messages() {
        let form = Form {
            name: "Algebra".to_string(),
            count: 3,
        };

        assert!(form.validate().is_ok());
    }
}
