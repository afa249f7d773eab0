use std::fmt;

use axum::{BoxError, http::StatusCode};
use tower::{load_shed::error::Overloaded, timeout::error::Elapsed};

#[derive(Debug)]
pub enum StartupError {
    IoError(std::io::Error),
    DotenvError(dotenvy::Error),
}

impl From<std::io::Error> for StartupError {
    fn from(error: std::io::Error) -> Self {
        StartupError::IoError(error)
    }
}

impl From<dotenvy::Error> for StartupError {
    fn from(error: dotenvy::Error) -> Self {
        StartupError::DotenvError(error)
    }
}

impl fmt::Display for StartupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StartupError::IoError(error) => write!(f, "io error: {error}"),
            StartupError::DotenvError(error) => write!(f, "could not load .env: {error}"),
        }
    }
}

impl std::error::Error for StartupError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StartupError::IoError(error) => Some(error),
            StartupError::DotenvError(error) => Some(error),
        }
    }
}

/// Turns failures from the tower middleware stack into responses
pub async fn handle_middleware_error(error: BoxError) -> (StatusCode, String) {
    if error.is::<Elapsed>() {
        return (StatusCode::REQUEST_TIMEOUT, String::from("request timed out"));
    }

    if error.is::<Overloaded>() {
        return (
            StatusCode::SERVICE_UNAVAILABLE,
            String::from("service is overloaded, try again later"),
        );
    }

    log::error!("unhandled middleware error: {error}");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        format!("unhandled internal error: {error}"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn timeout_maps_to_408() {
        let (status, _) = handle_middleware_error(Box::new(Elapsed::new())).await;
        assert_eq!(status, StatusCode::REQUEST_TIMEOUT);
    }

    #[tokio::test]
    async fn overload_maps_to_503() {
        let (status, _) = handle_middleware_error(Box::new(Overloaded::new())).await;
        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    }

    #[tokio::test]
    async fn anything_else_maps_to_500() {
        let (status, body) = handle_middleware_error("boom".into()).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.contains("boom"));
    }

    #[test]
    fn startup_error_displays_source() {
        let error: StartupError =
            std::io::Error::new(std::io::ErrorKind::AddrInUse, "address in use").into();
        assert_eq!(error.to_string(), "io error: address in use");
    }

    #[test]
    fn dotenv_error_displays_readably() {
        let error: StartupError = dotenvy::Error::LineParse(String::from("A='b"), 2).into();
        let message = error.to_string();

        assert!(message.starts_with("could not load .env: "), "{message}");
        assert!(!message.contains("DotenvError"));
    }
}
