use std::process::ExitCode;

use hello_world_api::{app, args::Args, errors::StartupError, logging};
use tokio::{net::TcpListener, signal};

#[tokio::main]
async fn main() -> ExitCode {
    let args = match Args::load() {
        Ok(args) => args,
        Err(error) => {
            logging::init("info");
            log::error!("{error}");
            return ExitCode::FAILURE;
        }
    };
    logging::init(&args.log_level);

    if let Err(error) = serve(&args).await {
        log::error!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn serve(args: &Args) -> Result<(), StartupError> {
    let listener = TcpListener::bind(args.address()).await?;
    log::info!("listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app(args))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    log::info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(error) = signal::ctrl_c().await {
            log::error!("failed to listen for ctrl-c: {error}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(error) => {
                log::error!("failed to listen for SIGTERM: {error}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    log::info!("shutdown signal received");
}
