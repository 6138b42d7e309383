use super::types::{request, response};
use crate::{
    modules::food::{repository, validation},
    types::Context,
    utils::sanitize,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = sanitize::strip_reserved(payload.fields);

    validation::validate_fields(&fields, true).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    ctx.store
        .foods
        .create(repository::CreateFoodPayload {
            owner_id: payload.auth.user.id,
            fields,
        })
        .await
        .map_err(|_| response::Error::FoodCreationFailed)
        .map(response::Success::FoodCreated)
}
