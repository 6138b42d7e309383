pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        SignedOut,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedOut => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        FailedToSignOut,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FailedToSignOut => ApiError::internal("Failed to sign out"),
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
