use super::types::{request, response};
use crate::{
    modules::food::{repository, validation},
    types::Context,
    utils::{ownership, sanitize},
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let fields = sanitize::remove_blanks(sanitize::strip_reserved(payload.fields));

    let food = ctx
        .store
        .foods
        .find_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchFood)?;
    let food = ownership::handle_404(food).map_err(|_| response::Error::FoodNotFound)?;

    ownership::require_ownership(&payload.auth.user.id, &food)
        .map_err(|_| response::Error::NotFoodOwner)?;

    validation::validate_fields(&fields, false).map_err(|errors| {
        tracing::warn!("Failed to validate payload: {errors}");
        response::Error::FailedToValidate(errors)
    })?;

    ctx.store
        .foods
        .update_by_id(&food.id, repository::UpdateFoodPayload { fields })
        .await
        .map_err(|_| response::Error::FailedToUpdateFood)
        .map(|_| response::Success::FoodUpdated)
}
