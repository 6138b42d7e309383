use super::types::{request, response};
use crate::{types::Context, utils::password};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    payload.passwords.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if !password::verify(&payload.passwords.old, &payload.auth.user.password_hash) {
        return Err(response::Error::IncorrectPassword);
    }

    let password_hash = password::hash(&payload.passwords.new).map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::FailedToUpdatePassword
    })?;

    ctx.store
        .users
        .update_password_by_id(&payload.auth.user.id, password_hash)
        .await
        .map_err(|_| response::Error::FailedToUpdatePassword)
        .map(|_| response::Success::PasswordChanged)
}
