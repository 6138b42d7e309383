use super::types::{request, response};
use crate::{types::Context, utils::ownership};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let food = ctx
        .store
        .foods
        .find_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteFood)?;
    let food = ownership::handle_404(food).map_err(|_| response::Error::FoodNotFound)?;

    ownership::require_ownership(&payload.auth.user.id, &food)
        .map_err(|_| response::Error::NotFoodOwner)?;

    ctx.store
        .foods
        .delete_by_id(&food.id)
        .await
        .map_err(|_| response::Error::FailedToDeleteFood)
        .map(|_| response::Success::FoodDeleted)
}
