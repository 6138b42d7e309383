mod change_password;
mod sign_in;
mod sign_out;
mod sign_up;

use crate::types::Context;
use axum::routing::{delete, patch, post, Router};
use std::sync::Arc;

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .route("/sign-up", post(sign_up::handler))
        .route("/sign-in", post(sign_in::handler))
        .route("/change-password", patch(change_password::handler))
        .route("/sign-out", delete(sign_out::handler))
}
