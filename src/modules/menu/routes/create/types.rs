pub mod request {
    use crate::modules::auth::middleware::Auth;
    use crate::modules::menu::routes::price::Price;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub name: String,
        pub description: String,
        pub price: Price,
        #[form_data(limit = "10MiB")]
        pub cover_image: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub body: Body,
        pub auth: Auth,
    }
}

pub mod response {
    use crate::modules::menu::repository::Menu;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuCreated(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuCreated(menu) => (
                    StatusCode::CREATED,
                    Json(json!({
                        "success": true,
                        "message": "Menu added successfully",
                        "menu": menu
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        ImageRequired,
        FailedToCreateMenu,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::ImageRequired => (
                    StatusCode::BAD_REQUEST,
                    Json(json!({ "success": false, "message": "Image is required" })),
                )
                    .into_response(),
                Self::FailedToCreateMenu => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
