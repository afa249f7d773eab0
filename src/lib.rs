use axum::{Router, error_handling::HandleErrorLayer, middleware, routing::get};
use tower::{ServiceBuilder, limit::GlobalConcurrencyLimitLayer};
use tower_http::compression::CompressionLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

pub mod args;
pub mod errors;
pub mod logging;
pub mod routes;

use crate::args::Args;
use crate::errors::handle_middleware_error;
use crate::routes::{docs, root};

pub const OPENAPI_URL: &str = "/openapi.json";
pub const SWAGGER_UI_PATH: &str = "/swagger-ui";

#[derive(OpenApi)]
#[openapi(
    info(title = "Hello World FastAPI"),
    paths(root::get),
    components(schemas(root::GreetingResponse)),
    tags(
        (name = "root", description = "Greeting served at the root path")
    )
)]
pub struct ApiDoc;

/// Routes and documentation without any middleware
pub fn router() -> Router {
    Router::new()
        .route("/", get(root::get))
        .route("/docs", get(docs::swagger_ui))
        .route("/redoc", get(docs::redoc))
        .merge(SwaggerUi::new(SWAGGER_UI_PATH).url(OPENAPI_URL, ApiDoc::openapi()))
}

pub fn app(args: &Args) -> Router {
    with_middleware(router(), args)
}

/// Wraps any router in the logging, load shedding, concurrency limit and
/// timeout stack used by the server
pub fn with_middleware(router: Router, args: &Args) -> Router {
    router
        .layer(CompressionLayer::new())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .load_shed()
                // One semaphore shared by every route
                .layer(GlobalConcurrencyLimitLayer::new(
                    args.concurrency_limit as usize,
                ))
                .timeout(args.request_timeout()),
        )
        .layer(middleware::from_fn(logging::log_requests))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn title_is_set() {
        assert_eq!(ApiDoc::openapi().info.title, "Hello World FastAPI");
    }

    #[test]
    fn root_operation_is_tagged_and_summarized() {
        let openapi = ApiDoc::openapi();
        let operation = openapi.paths.paths["/"].get.as_ref().unwrap();

        assert_eq!(operation.tags.as_deref(), Some(&[String::from("root")][..]));
        assert_eq!(
            operation.summary.as_deref(),
            Some("A simple health-check endpoint that returns a greeting.")
        );
    }

    #[test]
    fn root_tag_is_declared() {
        let tags = ApiDoc::openapi().tags.unwrap();
        let root = tags.iter().find(|tag| tag.name == "root").unwrap();

        assert_eq!(
            root.description.as_deref(),
            Some("Greeting served at the root path")
        );
    }
}
