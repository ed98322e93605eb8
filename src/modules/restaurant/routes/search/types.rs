pub mod request {
    use serde::Deserialize;

    #[derive(Deserialize)]
    pub struct Query {
        #[serde(rename = "searchQuery")]
        pub search_query: Option<String>,
        /// Comma-separated cuisine labels.
        #[serde(rename = "selectedCuisines")]
        pub selected_cuisines: Option<String>,
    }

    pub struct Payload {
        pub search_text: String,
        pub query: Query,
    }

    impl Payload {
        pub fn selected_cuisines(&self) -> Vec<String> {
            self.query
                .selected_cuisines
                .as_deref()
                .unwrap_or("")
                .split(',')
                .filter(|cuisine| !cuisine.is_empty())
                .map(String::from)
                .collect()
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        fn payload(selected_cuisines: Option<&str>) -> Payload {
            Payload {
                search_text: String::from(""),
                query: Query {
                    search_query: None,
                    selected_cuisines: selected_cuisines.map(String::from),
                },
            }
        }

        #[test]
        fn splits_on_commas_and_drops_empty_entries() {
            assert_eq!(
                payload(Some("Italian,,Thai,")).selected_cuisines(),
                vec![String::from("Italian"), String::from("Thai")]
            );
        }

        #[test]
        fn missing_parameter_means_no_filter() {
            assert!(payload(None).selected_cuisines().is_empty());
        }
    }
}

pub mod response {
    use crate::modules::restaurant::repository::Restaurant;
    use axum::{extract::Json, http::StatusCode, response::IntoResponse};
    use serde_json::json;

    pub enum Success {
        Restaurants(Vec<Restaurant>),
    }

    impl IntoResponse for Success {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::Restaurants(restaurants) => (
                    StatusCode::OK,
                    Json(json!({
                        "success": true,
                        "data": restaurants
                    })),
                )
                    .into_response(),
            }
        }
    }

    pub enum Error {
        FailedToSearchRestaurants,
    }

    impl IntoResponse for Error {
        fn into_response(self) -> axum::response::Response {
            match self {
                Self::FailedToSearchRestaurants => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "message": "Internal server error" })),
                )
                    .into_response(),
            }
        }
    }

    pub type Response = Result<Success, Error>;
}
