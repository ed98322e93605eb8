use super::types::{request, response};
use crate::{
    modules::restaurant::{repository, routes::cuisines},
    types::Context,
    utils::storage,
};
use std::{io::Read, sync::Arc};

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let existing =
        repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user_id.clone())
            .await
            .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    if existing.is_some() {
        return Err(response::Error::RestaurantAlreadyExists);
    }

    let mut cover_image_file = payload
        .body
        .cover_image
        .ok_or(response::Error::ImageRequired)?;

    let cuisines = cuisines::parse(payload.body.cuisines.as_str()).map_err(|err| {
        tracing::error!("Failed to parse the cuisines field: {}", err);
        response::Error::FailedToCreateRestaurant
    })?;

    let mut buf: Vec<u8> = vec![];

    cover_image_file
        .contents
        .read_to_end(&mut buf)
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            response::Error::FailedToCreateRestaurant
        })?;

    let cover_image = storage::upload_file(ctx.storage.clone(), buf)
        .await
        .map_err(|_| response::Error::FailedToCreateRestaurant)?;

    repository::create(
        &ctx.db_conn.pool,
        repository::CreateRestaurantPayload {
            name: payload.body.name,
            city: payload.body.city,
            country: payload.body.country,
            delivery_time: payload.body.delivery_time,
            cuisines,
            cover_image,
            owner_id: payload.auth.user_id,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateRestaurant)
    .map(|_| response::Success::RestaurantCreated)
}
