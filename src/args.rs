use std::time::Duration;

use clap::Parser;

use crate::errors::StartupError;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Args {
    #[arg(env = "HOST", long, default_value_t = String::from("0.0.0.0"))]
    pub host: String,

    #[arg(env = "PORT", long, default_value_t = 3000)]
    pub port: u16,

    /// Default log filter, `RUST_LOG` takes precedence
    #[arg(env = "LOG_LEVEL", long, default_value_t = String::from("info"))]
    pub log_level: String,

    /// Seconds before a request is answered with 408
    #[arg(env = "REQUEST_TIMEOUT", long, default_value_t = 30)]
    pub request_timeout: u64,

    /// In-flight requests allowed before load shedding
    #[arg(
        env = "CONCURRENCY_LIMIT",
        long,
        default_value_t = 1024,
        value_parser = clap::value_parser!(u32).range(1..)
    )]
    pub concurrency_limit: u32,
}

impl Args {
    pub fn load() -> Result<Args, StartupError> {
        optional_env_file(dotenvy::dotenv())?;
        Ok(Args::parse())
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout)
    }
}

/// A missing `.env` is fine, a malformed one is not
pub fn optional_env_file<T>(result: dotenvy::Result<T>) -> Result<(), StartupError> {
    match result {
        Ok(_) => Ok(()),
        Err(error) if error.not_found() => Ok(()),
        Err(error) => Err(error.into()),
    }
}
