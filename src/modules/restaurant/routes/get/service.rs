use super::types::{request, response};
use crate::{
    modules::{
        menu,
        restaurant::repository::{self, RestaurantWithMenus},
    },
    types::Context,
};
use std::sync::Arc;

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let menus = menu::repository::find_by_restaurant_id(&ctx.db_conn.pool, restaurant.id.clone())
        .await
        .map_err(|_| response::Error::FailedToFetchRestaurant)?;

    Ok(response::Success::Restaurant(RestaurantWithMenus {
        restaurant,
        menus,
    }))
}
