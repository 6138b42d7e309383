use super::types::response;
use crate::{modules::food::service as food_service, types::Context};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>) -> response::Response {
    let foods = ctx
        .store
        .foods
        .find_many()
        .await
        .map_err(|_| response::Error::FailedToFetchFoods)?;

    food_service::populate_many(&ctx, foods)
        .await
        .map_err(|_| response::Error::FailedToFetchFoods)
        .map(response::Success::Foods)
}
