use crate::types::Context;
use axum::Router;
use std::sync::Arc;

use super::{menu, order, restaurant};

pub fn get_router() -> Router<Arc<Context>> {
    Router::new()
        .nest("/restaurants", restaurant::get_router())
        .nest("/menus", menu::get_router())
        .nest("/orders", order::get_router())
}
