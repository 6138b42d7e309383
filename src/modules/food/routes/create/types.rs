pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Deserialize)]
    pub struct Body {
        pub food: Map<String, Value>,
    }

    pub struct Payload {
        pub fields: Map<String, Value>,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::{modules::food::repository::Food, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;
    use validator::ValidationErrors;

    pub enum Success {
        FoodCreated(Food),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodCreated(food) => {
                    (StatusCode::CREATED, Json(json!({ "food": food }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToValidate(ValidationErrors),
        FoodCreationFailed,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FailedToValidate(errors) => errors.into(),
                Error::FoodCreationFailed => ApiError::internal("Food creation failed"),
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
