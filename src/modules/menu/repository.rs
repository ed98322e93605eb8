use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::{BigDecimal, Json};
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

use crate::utils::storage::UploadedMedia;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Menu {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub cover_image: Json<UploadedMedia>,
    /// NULL when the creating owner had no restaurant yet; such a menu is
    /// persisted but unlinked.
    pub restaurant_id: Option<String>,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

pub struct CreateMenuPayload {
    pub name: String,
    pub description: String,
    pub price: BigDecimal,
    pub cover_image: UploadedMedia,
    pub restaurant_id: Option<String>,
}

pub struct UpdateMenuPayload {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<BigDecimal>,
    pub cover_image: Option<UploadedMedia>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateMenuPayload,
) -> Result<Menu, Error> {
    sqlx::query_as::<_, Menu>(
        "
        INSERT INTO menus (
            id,
            name,
            description,
            price,
            cover_image,
            restaurant_id
        )
        VALUES ($1, $2, $3, $4, $5, $6)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(Json(payload.cover_image))
    .bind(payload.restaurant_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a menu: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Menu>, Error> {
    sqlx::query_as::<_, Menu>("SELECT * FROM menus WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch a menu by id: {}", err);
            Error::UnexpectedError
        })
}

/// Menus in insertion order, the order their references were appended to the
/// restaurant.
pub async fn find_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Menu>, Error> {
    sqlx::query_as::<_, Menu>(
        "SELECT * FROM menus WHERE restaurant_id = $1 ORDER BY created_at ASC",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menus by restaurant_id: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn find_by_restaurant_id_newest_first<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<Menu>, Error> {
    sqlx::query_as::<_, Menu>(
        "SELECT * FROM menus WHERE restaurant_id = $1 ORDER BY created_at DESC",
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch menus by restaurant_id: {}",
            err
        );
        Error::UnexpectedError
    })
}

/// Partial update: absent fields keep their stored value.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateMenuPayload,
) -> Result<Option<Menu>, Error> {
    sqlx::query_as::<_, Menu>(
        "
        UPDATE menus SET
            name = COALESCE($2, name),
            description = COALESCE($3, description),
            price = COALESCE($4, price),
            cover_image = COALESCE($5, cover_image),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(payload.name)
    .bind(payload.description)
    .bind(payload.price)
    .bind(payload.cover_image.map(Json))
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a menu by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
