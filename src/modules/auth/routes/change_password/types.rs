pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use validator::Validate;

    #[derive(Deserialize)]
    pub struct Body {
        pub passwords: Passwords,
    }

    #[derive(Deserialize, Validate)]
    pub struct Passwords {
        pub old: String,
        #[validate(length(
            min = 8,
            code = "PASSWORD_TOO_SHORT",
            message = "Password must be at least 8 characters long"
        ))]
        pub new: String,
    }

    pub struct Payload {
        pub passwords: Passwords,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        PasswordChanged,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::PasswordChanged => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        IncorrectPassword,
        FailedToUpdatePassword,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FailedToValidate(errors) => errors.into(),
                Error::IncorrectPassword => ApiError::validation("Old password is incorrect"),
                Error::FailedToUpdatePassword => ApiError::internal("Failed to update password"),
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
