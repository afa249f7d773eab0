use std::time::Instant;

use axum::{extract::Request, middleware::Next, response::Response};
use env_logger::Env;

/// Installs `env_logger`, `RUST_LOG` wins over `default_filter`
pub fn init(default_filter: &str) {
    env_logger::Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

pub async fn log_requests(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    log::info!(
        "{} {} {} ({:?})",
        method,
        path,
        response.status().as_u16(),
        start.elapsed()
    );

    response
}
