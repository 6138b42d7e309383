use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use validator::ValidationErrors;

/// Every failure a route can surface, reduced to the kinds the HTTP layer
/// distinguishes. Route-level error enums convert into this type, which is
/// the only place that knows about status codes.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Forbidden(String),
    Unauthorized(String),
    Conflict(String),
    Validation {
        message: String,
        errors: Option<Value>,
    },
    MalformedRequest(String),
    Internal(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Forbidden(_) => StatusCode::FORBIDDEN,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::Conflict(_) => StatusCode::CONFLICT,
            Self::Validation { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            Self::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Self::NotFound(message)
            | Self::Forbidden(message)
            | Self::Unauthorized(message)
            | Self::Conflict(message)
            | Self::MalformedRequest(message)
            | Self::Internal(message) => message,
            Self::Validation { message, .. } => message,
        }
    }

    pub fn not_found(message: &str) -> Self {
        Self::NotFound(message.to_string())
    }

    pub fn forbidden(message: &str) -> Self {
        Self::Forbidden(message.to_string())
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::Unauthorized(message.to_string())
    }

    pub fn conflict(message: &str) -> Self {
        Self::Conflict(message.to_string())
    }

    pub fn malformed_request(message: &str) -> Self {
        Self::MalformedRequest(message.to_string())
    }

    pub fn internal(message: &str) -> Self {
        Self::Internal(message.to_string())
    }

    pub fn validation(message: &str) -> Self {
        Self::Validation {
            message: message.to_string(),
            errors: None,
        }
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        Self::Validation {
            message: String::from("Failed to validate payload"),
            errors: Some(json!(errors)),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        tracing::warn!("Rejected request body: {}", rejection.body_text());

        match rejection {
            JsonRejection::JsonDataError(err) => Self::Validation {
                message: err.body_text(),
                errors: None,
            },
            rejection => Self::malformed_request(&rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!("Request failed: {}", self.message());
        }

        let body = match self {
            Self::Validation {
                message,
                errors: Some(errors),
            } => json!({ "error": message, "errors": errors }),
            other => json!({ "error": other.message() }),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::ValidationError;

    #[test]
    fn maps_every_kind_to_its_status() {
        let cases = [
            (ApiError::not_found("x"), StatusCode::NOT_FOUND),
            (ApiError::forbidden("x"), StatusCode::FORBIDDEN),
            (ApiError::unauthorized("x"), StatusCode::UNAUTHORIZED),
            (ApiError::conflict("x"), StatusCode::CONFLICT),
            (ApiError::validation("x"), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::malformed_request("x"), StatusCode::BAD_REQUEST),
            (ApiError::internal("x"), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (error, status) in cases {
            assert_eq!(error.status_code(), status);
            assert_eq!(error.into_response().status(), status);
        }
    }

    #[test]
    fn validation_errors_carry_field_details() {
        let mut errors = ValidationErrors::new();
        errors.add("title", ValidationError::new("REQUIRED"));

        let error = ApiError::from(errors);

        match &error {
            ApiError::Validation {
                errors: Some(details),
                ..
            } => assert!(details.get("title").is_some()),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
    }
}
