pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Body {
        pub credentials: Credentials,
    }

    #[derive(Deserialize)]
    pub struct Credentials {
        pub email: String,
        pub password: String,
    }
}

pub mod response {
    use crate::{modules::user::repository::User, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        SignedIn { user: User, token: String },
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::SignedIn { user, token } => {
                    let mut user = json!(user);
                    user["token"] = json!(token);

                    (StatusCode::OK, Json(json!({ "user": user }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        InvalidCredentials,
        FailedToFetchUser,
        FailedToCreateSession,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::InvalidCredentials => ApiError::unauthorized("Invalid email or password"),
                Error::FailedToFetchUser => ApiError::internal("Failed to fetch user"),
                Error::FailedToCreateSession => ApiError::internal("Failed to create session"),
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
