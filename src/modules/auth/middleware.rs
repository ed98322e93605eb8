use super::service;
use crate::types::Context;
use axum::extract::{Extension, FromRequestParts};
use axum::http::{request::Parts, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::{async_trait, Json, RequestPartsExt};
use axum_extra::extract::cookie::CookieJar;
use serde_json::json;
use std::sync::Arc;

pub const TOKEN_COOKIE: &str = "token";

/// Rejects before the handler runs; no data-store access happens on a
/// missing or invalid cookie.
#[derive(Clone)]
pub struct Auth {
    pub user_id: String,
}

fn unauthenticated() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "User not authenticated" })),
    )
        .into_response()
}

fn invalid_token() -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({ "success": false, "message": "Invalid token" })),
    )
        .into_response()
}

fn internal_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "message": "Internal server error" })),
    )
        .into_response()
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for Auth {
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Extension(ctx) = parts.extract::<Extension<Arc<Context>>>().await.unwrap();
        let jar = parts.extract::<CookieJar>().await.unwrap();

        let token = jar
            .get(TOKEN_COOKIE)
            .map(|cookie| cookie.value().to_string())
            .ok_or_else(unauthenticated)?;

        ctx.auth
            .tokenizer
            .verify(token.as_str())
            .map(|claims| Self {
                user_id: claims.user_id,
            })
            .map_err(|err| match err {
                service::Error::InvalidToken | service::Error::ExpiredToken => invalid_token(),
                service::Error::UnexpectedError => internal_error(),
            })
    }
}
