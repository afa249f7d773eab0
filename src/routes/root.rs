use axum::{Json, http::StatusCode, response::IntoResponse};
use serde::Serialize;
use utoipa::ToSchema;

pub const GREETING: &str = "Hello, world!";

#[derive(ToSchema, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GreetingResponse {
    #[schema(example = "Hello, world!")]
    pub message: String,
}

impl Default for GreetingResponse {
    fn default() -> Self {
        GreetingResponse {
            message: String::from(GREETING),
        }
    }
}

/// A simple health-check endpoint that returns a greeting.
#[utoipa::path(
    get,
    path = "/",
    tag = "root",
    responses(
        (status = 200, description = "Greeting message", body = GreetingResponse)
    )
)]
pub async fn get() -> impl IntoResponse {
    log::debug!("fn: routes::root::get");

    (StatusCode::OK, Json(GreetingResponse::default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeting_serializes_to_single_field() {
        let body = serde_json::to_string(&GreetingResponse::default()).unwrap();
        assert_eq!(body, r#"{"message":"Hello, world!"}"#);
    }

    #[tokio::test]
    async fn handler_returns_ok() {
        let response = get().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }
}
