use super::types::{request, response};
use crate::{
    modules::user,
    types::Context,
    utils::{password, validation},
};
use std::sync::Arc;
use validator::Validate;

pub async fn service(ctx: Arc<Context>, payload: request::Credentials) -> response::Response {
    payload.validate().map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    if payload.password != payload.password_confirmation {
        return Err(response::Error::FailedToValidate(validation::single(
            "password_confirmation",
            "PASSWORD_MISMATCH",
            "Password confirmation does not match password",
        )));
    }

    let email = payload.email.to_lowercase();

    if ctx
        .store
        .users
        .find_by_email(&email)
        .await
        .map_err(|_| response::Error::FailedToFetchUser)?
        .is_some()
    {
        return Err(response::Error::EmailAlreadyInUse);
    }

    let password_hash = password::hash(&payload.password).map_err(|err| {
        tracing::error!("Failed to hash password: {}", err);
        response::Error::SignupFailed
    })?;

    ctx.store
        .users
        .create(user::repository::CreateUserPayload {
            email,
            password_hash,
        })
        .await
        .map_err(|err| match err {
            user::repository::Error::EmailTaken => response::Error::EmailAlreadyInUse,
            user::repository::Error::UnexpectedError => response::Error::SignupFailed,
        })
        .map(response::Success::UserCreated)
}
