use super::{service::service, types::request};
use crate::{modules::auth::middleware::Auth, types::Context, utils::error::ApiError};
use axum::{
    extract::{Json, State},
    response::IntoResponse,
};
use axum_extra::extract::WithRejection;
use std::sync::Arc;

pub async fn handler(
    auth: Auth,
    State(ctx): State<Arc<Context>>,
    WithRejection(Json(body), _): WithRejection<Json<request::Body>, ApiError>,
) -> impl IntoResponse {
    service(
        ctx,
        request::Payload {
            passwords: body.passwords,
            auth,
        },
    )
    .await
}
