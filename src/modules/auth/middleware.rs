use super::{repository::Session, service};
use crate::{modules::user::repository::User, types::Context, utils::error::ApiError};
use axum::{
    async_trait,
    extract::{Extension, FromRequestParts},
    http::request::Parts,
    RequestPartsExt,
};
use axum_extra::TypedHeader;
use headers::{authorization::Bearer, Authorization};
use std::sync::Arc;

const INVALID_SESSION: &str = "Invalid session token";

/// The authenticated caller. Extracting it rejects the request with 401 unless a
/// live bearer token is presented.
#[derive(Clone, Debug)]
pub struct Auth {
    pub user: User,
    pub session: Session,
}

async fn get_auth_from_token(ctx: Arc<Context>, token: &str) -> Result<Auth, ApiError> {
    let session = service::verify_access_token(ctx.clone(), token)
        .await
        .map_err(|err| match err {
            service::Error::UnexpectedError => ApiError::internal("Failed to verify session"),
            service::Error::InvalidSession | service::Error::ExpiredToken => {
                ApiError::unauthorized(INVALID_SESSION)
            }
        })?;

    let user = ctx
        .store
        .users
        .find_by_id(&session.user_id)
        .await
        .map_err(|_| ApiError::internal("Failed to verify session"))?
        .ok_or(ApiError::unauthorized(INVALID_SESSION))?;

    Ok(Auth { user, session })
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts
            .extract::<Extension<Arc<Context>>>()
            .await
            .map_err(|err| {
                tracing::error!("Request context missing: {}", err);
                ApiError::internal("Sorry an error occurred")
            })?;

        let TypedHeader(Authorization(bearer)) = parts
            .extract::<TypedHeader<Authorization<Bearer>>>()
            .await
            .map_err(|err| {
                tracing::warn!("Rejected authorization header: {}", err);
                ApiError::unauthorized(INVALID_SESSION)
            })?;

        get_auth_from_token(ctx, bearer.token()).await
    }
}
