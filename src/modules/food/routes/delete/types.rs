pub mod request {
    use crate::modules::auth::middleware::Auth;

    pub struct Payload {
        pub id: String,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::utils::error::ApiError;
    use axum::{http::StatusCode, response::IntoResponse};

    pub enum Success {
        FoodDeleted,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FoodDeleted => StatusCode::NO_CONTENT.into_response(),
            }
        }
    }

    pub enum Error {
        FoodNotFound,
        NotFoodOwner,
        FailedToDeleteFood,
    }

    impl From<Error> for ApiError {
        fn from(err: Error) -> Self {
            match err {
                Error::FoodNotFound => ApiError::not_found("Food not found"),
                Error::NotFoodOwner => ApiError::forbidden("You are not the owner of this food"),
                Error::FailedToDeleteFood => ApiError::internal("Failed to delete food"),
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
