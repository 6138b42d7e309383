use super::types::{request, response};
use crate::{modules::food::service as food_service, types::Context, utils::ownership};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let food = ctx
        .store
        .foods
        .find_by_id(&payload.id)
        .await
        .map_err(|_| response::Error::FailedToFetchFood)?;
    let food = ownership::handle_404(food).map_err(|_| response::Error::FoodNotFound)?;

    food_service::populate(&ctx, food)
        .await
        .map_err(|_| response::Error::FailedToFetchFood)
        .map(response::Success::Food)
}
