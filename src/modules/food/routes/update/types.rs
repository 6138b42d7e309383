pub mod request {
    use crate::modules::auth::middleware::Auth;
    use serde::Deserialize;
    use serde_json::{Map, Value};

    #[derive(Deserialize)]
    pub struct Body {
        pub food: Map<String, Value>,
    }

    pub struct Payload {
        pub id: String,
        pub fields: Map<String, Value>,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};
    use validator::ValidationErrors;

    pub enum Success {
        FoodUpdated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodUpdated => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        FoodNotFound,
        NotFoodOwner,
        FailedToValidate(ValidationErrors),
        FailedToFetchFood,
        FailedToUpdateFood,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FoodNotFound => ApiError::not_found("Food not found"),
                Error::NotFoodOwner => ApiError::forbidden("You are not the owner of this food"),
                Error::FailedToValidate(errors) => errors.into(),
                Error::FailedToFetchFood => ApiError::internal("Failed to find food"),
                Error::FailedToUpdateFood => ApiError::internal("Failed to update food"),
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
