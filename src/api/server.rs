//! Server startup: bind the configured port and serve the API router.

use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::info;

use crate::config::Config;
use crate::error::Result;
use crate::utils::shutdown_signal;

use super::routes::create_router;

/// Bind the configured port and serve requests until shutdown.
///
/// A failed bind (port already in use, bad address) propagates as an IO
/// error; startup is fatal with no retry.
pub async fn serve(config: &Config) -> Result<()> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    let listener = TcpListener::bind(addr).await?;

    info!("Server running on port {}", config.port);

    let router = create_router();

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}
