use super::types::{request, response};
use crate::{
    modules::menu::repository,
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
        response::Error::FailedToUpdateMenu
    })?;

    storage::upload_file(storage, buf)
        .await
        .map_err(|_| response::Error::FailedToUpdateMenu)
}

pub async fn service(ctx: Arc<Context>, payload: request::Payload) -> response::Response {
    repository::find_by_id(&ctx.db_conn.pool, payload.id.clone())
        .await
        .map_err(|_| response::Error::FailedToUpdateMenu)?
        .ok_or(response::Error::MenuNotFound)?;

    // The replaced image is not deleted from the gateway.
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
        payload.id,
        repository::UpdateMenuPayload {
            name: request::provided(payload.body.name),
            description: request::provided(payload.body.description),
            price: payload.body.price.and_then(|price| price.0),
            cover_image,
        },
    )
    .await
    .map_err(|_| response::Error::FailedToUpdateMenu)?
    .ok_or(response::Error::MenuNotFound)
    .map(response::Success::MenuUpdated)
}
