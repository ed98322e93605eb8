use super::{service::service, types::request};
use crate::types::Context;
use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
};
use std::sync::Arc;

pub async fn handler(
    State(ctx): State<Arc<Context>>,
    Path(search_text): Path<String>,
    Query(query): Query<request::Query>,
) -> impl IntoResponse {
    service(ctx, request::Payload { search_text, query }).await
}
