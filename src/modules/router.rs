use super::{auth, food};
use crate::types::Context;
use axum::Router;
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .merge(auth::routes::get_router())
        .nest("/foods", food::routes::get_router())
}
