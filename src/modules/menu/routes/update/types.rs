pub mod request {
    use crate::modules::menu::routes::price::PriceUpdate;
    use axum_typed_multipart::{FieldData, TryFromMultipart};
    use tempfile::NamedTempFile;

    /// An empty string means the field was not provided; the stored value is
    /// kept, same as omitting the field entirely.
    pub fn provided(field: Option<String>) -> Option<String> {
        field.filter(|value| !value.is_empty())
    }

    #[derive(TryFromMultipart)]
    pub struct Body {
        pub name: Option<String>,
        pub description: Option<String>,
        pub price: Option<PriceUpdate>,
        #[form_data(limit = "10MiB")]
        pub cover_image: Option<FieldData<NamedTempFile>>,
    }

    pub struct Payload {
        pub id: String,
        pub body: Body,
    }

    #[cfg(test)]
    mod tests {
        use super::provided;

        #[test]
        fn empty_string_is_not_provided() {
            assert_eq!(provided(Some(String::from(""))), None);
        }

        #[test]
        fn missing_field_is_not_provided() {
            assert_eq!(provided(None), None);
        }

        #[test]
        fn non_empty_value_is_kept() {
            assert_eq!(
                provided(Some(String::from("Jollof rice"))),
                Some(String::from("Jollof rice"))
            );
        }
    }
}

pub mod response {
    use crate::modules::menu::repository::Menu;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        MenuUpdated(Menu),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuUpdated(menu) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "message": "Menu updated",
                        "menu": menu
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        MenuNotFound,
        FailedToUpdateMenu,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::MenuNotFound => (
                    StatusCode::NOT_FOUND,
                    Json(json!({ "success": false, "message": "Menu not found!" })),
                )
                    .into_response(),
                Self::FailedToUpdateMenu => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
