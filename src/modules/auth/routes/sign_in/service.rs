use super::types::{request, response};
use crate::{modules::auth::service, types::Context, utils::password};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Credentials) -> response::Response {
    let user = ctx
        .store
        .users
        .find_by_email(&payload.email.to_lowercase())
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .ok_or(response::Error::InvalidCredentials)?;

    if !password::verify(&payload.password, &user.password_hash) {
        tracing::warn!("Failed sign in attempt for user {}", user.id);
        return Err(response::Error::InvalidCredentials);
    }

    let session = service::create_session(ctx.clone(), user.id.clone())
        .await
        .map_err(|_| response::Error::FailedToCreateSession)?;

    Ok(response::Success::SignedIn {
        user,
        token: session.access_token,
    })
}
