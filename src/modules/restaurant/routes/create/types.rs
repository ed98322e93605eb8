pub mod request {
    use crate::modules::auth::middleware::Auth;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub name: String,
        pub city: String,
        pub country: String,
        pub delivery_time: i32,
        /// JSON-encoded string array.
        pub cuisines: String,
        #[form_data(limit = "10MiB")]
        pub cover_image: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        RestaurantCreated,
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantCreated => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Restaurant added successfully"
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        RestaurantAlreadyExists,
        ImageRequired,
        FailedToCreateRestaurant,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::RestaurantAlreadyExists => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({
                        "success": false,
                        "message": "Restaurant already exists for this user"
                    })),
                )
                    .into_response(),
                Self::ImageRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Image is required" })),
                )
                    .into_response(),
                Self::FailedToCreateRestaurant => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
