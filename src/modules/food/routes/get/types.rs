pub mod request {
    pub struct Payload {
        pub id: String,
    }
}

pub mod response {
    use crate::{modules::food::repository::PopulatedFood, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Food(PopulatedFood),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Food(food) => (StatusCode::OK, Json(json!({ "food": food }))).into_response(),
            }
        }
    }

    pub enum Error {
        FoodNotFound,
        FailedToFetchFood,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FoodNotFound => ApiError::not_found("Food not found"),
                Error::FailedToFetchFood => ApiError::internal("Failed to fetch food"),
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
