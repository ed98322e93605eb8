use super::types::{request, response};
use crate::{
    modules::{order::repository, restaurant},
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = restaurant::repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)?
        .ok_or(response::Error::RestaurantNotFound)?;

    repository::find_full_by_restaurant_id(&ctx.db_conn.pool, restaurant.id)
        .await
        .map_err(|_| response::Error::FailedToFetchOrders)
        .map(response::Success::Orders)
}
