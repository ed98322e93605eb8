use super::types::{request, response};
use crate::{
    modules::{menu::repository, restaurant},
    types::Context,
    utils::storage,
};
use std::{io::Read, sync::Arc};

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    let mut cover_image_file = payload
        .body
        .cover_image
        .ok_or(response::Error::ImageRequired)?;

    let mut buf: Vec<u8> = vec![];

    cover_image_file
        .contents
        .read_to_end(&mut buf)
        .map_err(|err| {
            tracing::error!("Failed to read the uploaded file {:?}", err);
            response::Error::FailedToCreateMenu
        })?;

    let cover_image = storage::upload_file(ctx.storage.clone(), buf)
        .await
        .map_err(|_| response::Error::FailedToCreateMenu)?;

    // Menu insert and restaurant link commit together. An owner without a
    // restaurant still gets the menu, just unlinked.
    let mut tx = ctx.db_conn.pool.begin().await.map_err(|err| {
        tracing::error!("Failed to start database transaction: {}", err);
        response::Error::FailedToCreateMenu
    })?;

    let restaurant =
        restaurant::repository::find_by_owner_id(&mut *tx, payload.auth.user_id.clone())
            .await
            .map_err(|_| response::Error::FailedToCreateMenu)?;

    let menu = repository::create(
        &mut *tx,
        repository::CreateMenuPayload {
            name: payload.body.name,
            description: payload.body.description,
            price: payload.body.price.0,
            cover_image,
            restaurant_id: restaurant.map(|restaurant| restaurant.id),
        },
    )
    .await
    .map_err(|_| response::Error::FailedToCreateMenu)?;

    tx.commit().await.map_err(|err| {
        tracing::error!("Failed to commit database transaction: {}", err);
        response::Error::FailedToCreateMenu
    })?;

    Ok(response::Success::MenuCreated(menu))
}
