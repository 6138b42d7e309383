pub mod response {
    use crate::{modules::food::repository::PopulatedFood, utils::error::ApiError};
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Foods(Vec<PopulatedFood>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Foods(foods) => {
                    (StatusCode::OK, Json(json!({ "foods": foods }))).into_response()
                }
            }
        }
    }

    pub enum Error {
        FailedToFetchFoods,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FailedToFetchFoods => ApiError::internal("Failed to fetch foods"),
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
