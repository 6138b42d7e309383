pub mod request {
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize)]
    pub struct Body {
        pub credentials: Credentials,
    }

    #[derive(Deserialize, Validate)]
    pub struct Credentials {
        #[validate(email(code = "INVALID_USER_EMAIL", message = "Invalid email address"))]
        pub email: String,
        #[validate(length(
            min = 8,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 8 characters long"
        ))]
        pub password: String,
        pub password_confirmation: String,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        UserCreated(User),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::UserCreated(user) => {
                    (StatusCode::CREATED, Json(json!({ "user": user }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FailedToFetchUser,
        EmailAlreadyInUse,
        SignupFailed,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FailedToValidate(errors) => errors.into(),
                Error::FailedToFetchUser => ApiError::internal("Failed to fetch user"),
                Error::EmailAlreadyInUse => ApiError::conflict("Email already in use"),
                Error::SignupFailed => ApiError::internal("Sign up failed!"),
            }
        }
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            ApiError::from(self).into_response()
        }
    }

    pub type Response = Result<Success, Error>;
}
