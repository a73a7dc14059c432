//! HTTP server lifecycle

use std::time::Duration;

use axum::Router;
use tokio::net::TcpListener;
use tokio::task::JoinError;
use tokio_util::sync::CancellationToken;

use crate::{Error, Result};

pub mod shutdown;

pub use shutdown::ShutdownController;

/// Serve `router` on `listener` until `shutdown` is cancelled.
///
/// After cancellation no new connections are accepted. In-flight requests
/// get `grace` to finish; whatever is still running after that is dropped.
pub async fn serve(
    listener: TcpListener,
    router: Router,
    shutdown: CancellationToken,
    grace: Duration,
) -> Result<()> {
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "Listening for HTTP traffic");

    let signal = shutdown.clone();
    let mut server = tokio::spawn(async move {
        axum::serve(listener, router)
            .with_graceful_shutdown(async move { signal.cancelled().await })
            .await
    });

    tokio::select! {
        joined = &mut server => return flatten(joined),
        _ = shutdown.cancelled() => {}
    }

    tracing::info!(grace_ms = grace.as_millis() as u64, "Draining in-flight requests");

    match tokio::time::timeout(grace, &mut server).await {
        Ok(joined) => {
            flatten(joined)?;
            tracing::info!("Server shutdown complete");
            Ok(())
        }
        Err(_) => {
            tracing::warn!("Grace period elapsed, dropping remaining connections");
            server.abort();
            Ok(())
        }
    }
}

fn flatten(joined: std::result::Result<std::io::Result<()>, JoinError>) -> Result<()> {
    match joined {
        Ok(result) => Ok(result?),
        Err(err) => Err(Error::internal(format!("server task failed: {}", err))),
    }
}
