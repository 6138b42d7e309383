use crate::utils::validation;
use serde_json::{Map, Value};
use validator::ValidationErrors;

/// Checks the constraints a stored food must satisfy. `title` must be present
/// on create; on update it is only checked when supplied.
pub fn validate_fields(
    fields: &Map<String, Value>,
    require_title: bool,
) -> Result<(), ValidationErrors> {
    match fields.get("title") {
        None if require_title => Err(validation::single("title", "REQUIRED", "Title is required")),
        None => Ok(()),
        Some(Value::String(title)) if !title.trim().is_empty() => Ok(()),
        Some(Value::String(_)) => {
            Err(validation::single("title", "BLANK", "Title must not be blank"))
        }
        Some(_) => Err(validation::single("title", "INVALID_TYPE", "Title must be a string")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn fields(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected an object, got {other}"),
        }
    }

    #[test]
    fn create_requires_a_title() {
        assert!(validate_fields(&fields(json!({ "title": "Soup" })), true).is_ok());

        let errors = validate_fields(&fields(json!({ "text": "hot" })), true).unwrap_err();
        assert!(errors.field_errors().contains_key("title"));
    }

    #[test]
    fn update_checks_title_only_when_present() {
        assert!(validate_fields(&fields(json!({ "text": "hot" })), false).is_ok());
        assert!(validate_fields(&fields(json!({ "title": "  " })), false).is_err());
        assert!(validate_fields(&fields(json!({ "title": 42 })), false).is_err());
    }
}
