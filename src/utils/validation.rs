use std::borrow::Cow;
use validator::{ValidationError, ValidationErrors};

pub fn error(code: &'static str, message: &'static str) -> ValidationError {
    ValidationError::new(code).with_message(Cow::from(message))
}

pub fn single(field: &'static str, code: &'static str, message: &'static str) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    errors.add(field, error(code, message));
    errors
}
