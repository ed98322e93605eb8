use super::types::{request, response};
use crate::{
    modules::restaurant::repository::{self, SearchFilters},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let cuisines = payload.selected_cuisines();
    let filters = SearchFilters::resolve(
        Some(payload.search_text),
        payload.query.search_query,
        cuisines,
    );

    repository::search(&ctx.db_conn.pool, filters)
        .await
        .map_err(|_| response::Error::FailedToSearchRestaurants)
        .map(response::Success::Restaurants)
}
