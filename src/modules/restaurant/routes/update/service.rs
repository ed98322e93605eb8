use super::types::{request, response};
use crate::{
    modules::restaurant::{repository, routes::cuisines},
    types::{Context, StorageContext},
    utils::storage::{self, UploadedMedia},
};
use axum_typed_multipart::FieldData;
use std::{io::Read, sync::Arc};
use tempfile::NamedTempFile;

async fn upload_cover_image(
    storage: StorageContext,
    mut new_image: FieldData<NamedTempFile>,
) -> Result<UploadedMedia, response::Error> {
    let mut buf: Vec<u8> = vec![];

    new_image.contents.read_to_end(&mut buf).map_err(|err| {
        tracing::error!("Failed to read the uploaded file {:?}", err);
        response::Error::FailedToUpdateRestaurant
    })?;

    storage::upload_file(storage, buf)
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let restaurant = repository::find_by_owner_id(&ctx.db_conn.pool, payload.auth.user_id)
        .await
        .map_err(|_| response::Error::FailedToUpdateRestaurant)?
        .ok_or(response::Error::RestaurantNotFound)?;

    let cuisines = cuisines::parse(payload.body.cuisines.as_str()).map_err(|err| {
        tracing::error!("Failed to parse the cuisines field: {}", err);
        response::Error::FailedToUpdateRestaurant
    })?;

    let cover_image = match payload
        .body
        .cover_image
        .map(|image| upload_cover_image(ctx.storage.clone(), image))
    {
        Some(fut) => Some(fut.await?),
        None => None,
    };

    repository::update_by_id(
        &ctx.db_conn.pool,
        restaurant.id,
        repository::UpdateRestaurantPayload {
            name: payload.body.name,
            city: payload.body.city,
            country: payload.body.country,
            delivery_time: payload.body.delivery_time,
            cuisines,
            cover_image,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateRestaurant)?
    .ok_or(response::Error::RestaurantNotFound)
    .map(response::Success::RestaurantUpdated)
}
