#[macro_use]
extern crate tracing;

pub mod assignment;
mod config;
pub mod error;
mod extractors;
mod handlers;
mod middlewares;
mod state;

pub use config::Config;
use error::{Error, Result};
pub use state::*;

use std::time::Duration;
use tokio::{net::TcpListener, signal};

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            error!("failed to listen for ctrl+c: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(err) => {
                error!("failed to install SIGTERM handler: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    };

    info!("shutdown signal received, draining connections");
}

pub async fn run<S: StateTrait>(
    listener: TcpListener,
    state: S,
    request_timeout: Duration,
) -> anyhow::Result<()> {
    info!("listening on {}", listener.local_addr()?);

    let app = middlewares::middlewares(state, handlers::routes::<S>(), request_timeout);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
