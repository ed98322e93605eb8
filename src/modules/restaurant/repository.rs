use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::{FromRow, PgExecutor};
use ulid::Ulid;

use crate::modules::menu::repository::Menu;
use crate::utils::storage::UploadedMedia;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub city: String,
    pub country: String,
    pub delivery_time: i32,
    pub cuisines: Vec<String>,
    pub cover_image: Json<UploadedMedia>,
    pub owner_id: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

/// A restaurant with its menu list resolved, the shape every populated
/// restaurant response uses.
#[derive(Serialize, Clone, Debug)]
pub struct RestaurantWithMenus {
    #[serde(flatten)]
    pub restaurant: Restaurant,
    pub menus: Vec<Menu>,
}

pub struct CreateRestaurantPayload {
    pub name: String,
    pub city: String,
    pub country: String,
    pub delivery_time: i32,
    pub cuisines: Vec<String>,
    pub cover_image: UploadedMedia,
    pub owner_id: String,
}

pub struct UpdateRestaurantPayload {
    pub name: String,
    pub city: String,
    pub country: String,
    pub delivery_time: i32,
    pub cuisines: Vec<String>,
    pub cover_image: Option<UploadedMedia>,
}

/// Search filters with the clause precedence already applied: a non-empty
/// `search_query` replaces the `search_text` clause entirely, matching the
/// upstream API contract. `resolve` is the only way to build one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchFilters {
    pub search_text: Option<String>,
    pub search_query: Option<String>,
    pub cuisines: Vec<String>,
}

impl SearchFilters {
    pub fn resolve(
        search_text: Option<String>,
        search_query: Option<String>,
        cuisines: Vec<String>,
    ) -> Self {
        let search_text = search_text.filter(|text| !text.is_empty());
        let search_query = search_query.filter(|query| !query.is_empty());

        Self {
            search_text: match search_query {
                Some(_) => None,
                None => search_text,
            },
            search_query,
            cuisines,
        }
    }
}

pub enum Error {
    UnexpectedError,
}

pub async fn create<'e, E: PgExecutor<'e>>(
    e: E,
    payload: CreateRestaurantPayload,
) -> Result<Restaurant, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        INSERT INTO restaurants (
            id,
            name,
            city,
            country,
            delivery_time,
            cuisines,
            cover_image,
            owner_id
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING *
        ",
    )
    .bind(Ulid::new().to_string())
    .bind(payload.name)
    .bind(payload.city)
    .bind(payload.country)
    .bind(payload.delivery_time)
    .bind(payload.cuisines)
    .bind(Json(payload.cover_image))
    .bind(payload.owner_id)
    .fetch_one(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to create a restaurant: {}", err);
        Error::UnexpectedError
    })
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a restaurant by id: {}",
                err
            );
            Error::UnexpectedError
        })
}

pub async fn find_by_owner_id<'e, E: PgExecutor<'e>>(
    e: E,
    owner_id: String,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>("SELECT * FROM restaurants WHERE owner_id = $1")
        .bind(owner_id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!(
                "Error occurred while trying to fetch a restaurant by owner_id: {}",
                err
            );
            Error::UnexpectedError
        })
}

/// Full-replace update: every profile field is overwritten, only the cover
/// image falls back to the stored one when no new upload is supplied.
pub async fn update_by_id<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    payload: UpdateRestaurantPayload,
) -> Result<Option<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        UPDATE restaurants SET
            name = $2,
            city = $3,
            country = $4,
            delivery_time = $5,
            cuisines = $6,
            cover_image = COALESCE($7, cover_image),
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(payload.name)
    .bind(payload.city)
    .bind(payload.country)
    .bind(payload.delivery_time)
    .bind(payload.cuisines)
    .bind(payload.cover_image.map(Json))
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update a restaurant by id {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}

pub async fn search<'e, E: PgExecutor<'e>>(
    e: E,
    filters: SearchFilters,
) -> Result<Vec<Restaurant>, Error> {
    sqlx::query_as::<_, Restaurant>(
        "
        SELECT * FROM restaurants
        WHERE
            (
                $1::TEXT IS NULL
                OR name ILIKE CONCAT('%', $1, '%')
                OR city ILIKE CONCAT('%', $1, '%')
                OR country ILIKE CONCAT('%', $1, '%')
            )
            AND (
                $2::TEXT IS NULL
                OR name ILIKE CONCAT('%', $2, '%')
                OR EXISTS (
                    SELECT 1 FROM UNNEST(cuisines) AS cuisine
                    WHERE cuisine ILIKE CONCAT('%', $2, '%')
                )
            )
            AND (CARDINALITY($3::TEXT[]) = 0 OR cuisines && $3)
        ",
    )
    .bind(filters.search_text)
    .bind(filters.search_query)
    .bind(filters.cuisines)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!("Error occurred while trying to search restaurants: {}", err);
        Error::UnexpectedError
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_text_alone_survives() {
        let filters = SearchFilters::resolve(Some(String::from("pizza")), None, vec![]);

        assert_eq!(filters.search_text, Some(String::from("pizza")));
        assert_eq!(filters.search_query, None);
    }

    #[test]
    fn search_query_replaces_search_text() {
        let filters = SearchFilters::resolve(
            Some(String::from("pizza")),
            Some(String::from("sushi")),
            vec![],
        );

        assert_eq!(filters.search_text, None);
        assert_eq!(filters.search_query, Some(String::from("sushi")));
    }

    #[test]
    fn empty_strings_are_treated_as_absent() {
        let filters = SearchFilters::resolve(
            Some(String::from("pizza")),
            Some(String::from("")),
            vec![],
        );

        assert_eq!(filters.search_text, Some(String::from("pizza")));
        assert_eq!(filters.search_query, None);
    }

    #[test]
    fn cuisines_pass_through() {
        let filters = SearchFilters::resolve(
            None,
            None,
            vec![String::from("Italian"), String::from("Thai")],
        );

        assert_eq!(filters.cuisines.len(), 2);
    }
}
