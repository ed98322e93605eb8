use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::types::{BigDecimal, Json};
use sqlx::{FromRow, PgExecutor};

use crate::modules::restaurant::repository::Restaurant;

#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    pub user_id: String,
    pub total: BigDecimal,
    /// Free-form on purpose: any string is accepted and stored verbatim, no
    /// transition table is enforced.
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct OrderUser {
    pub id: String,
    pub full_name: String,
    pub email: String,
}

/// An order with its restaurant and user references resolved eagerly.
#[derive(Serialize, Deserialize, Clone, Debug, FromRow)]
pub struct FullOrder {
    pub id: String,
    pub restaurant_id: String,
    pub user_id: String,
    pub total: BigDecimal,
    pub status: String,
    pub created_at: NaiveDateTime,
    pub updated_at: Option<NaiveDateTime>,
    pub restaurant: Json<Restaurant>,
    pub user: Json<OrderUser>,
}

pub enum Error {
    UnexpectedError,
}

pub async fn find_by_id<'e, E: PgExecutor<'e>>(e: E, id: String) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
        .bind(id)
        .fetch_optional(e)
        .await
        .map_err(|err| {
            tracing::error!("Error occurred while trying to fetch an order by id: {}", err);
            Error::UnexpectedError
        })
}

pub async fn find_full_by_restaurant_id<'e, E: PgExecutor<'e>>(
    e: E,
    restaurant_id: String,
) -> Result<Vec<FullOrder>, Error> {
    sqlx::query_as::<_, FullOrder>(
        r#"
        SELECT
            orders.*,
            ROW_TO_JSON(restaurants) AS restaurant,
            ROW_TO_JSON(users) AS "user"
        FROM orders
        INNER JOIN restaurants ON orders.restaurant_id = restaurants.id
        INNER JOIN users ON orders.user_id = users.id
        WHERE orders.restaurant_id = $1
        "#,
    )
    .bind(restaurant_id)
    .fetch_all(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to fetch orders by restaurant_id: {}",
            err
        );
        Error::UnexpectedError
    })
}

pub async fn update_status<'e, E: PgExecutor<'e>>(
    e: E,
    id: String,
    status: String,
) -> Result<Option<Order>, Error> {
    sqlx::query_as::<_, Order>(
        "
        UPDATE orders SET
            status = $2,
            updated_at = NOW()
        WHERE id = $1
        RETURNING *
        ",
    )
    .bind(id.clone())
    .bind(status)
    .fetch_optional(e)
    .await
    .map_err(|err| {
        tracing::error!(
            "Error occurred while trying to update the status of order {}: {}",
            id,
            err
        );
        Error::UnexpectedError
    })
}
