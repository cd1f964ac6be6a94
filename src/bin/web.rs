use std::net::SocketAddr;

use anyhow::Context;
use radials::logging::{init_logging, level_from_flags};
use radials::web::router;
use tracing::info;

const DEFAULT_ADDR: &str = "127.0.0.1:3000";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging(level_from_flags(1, false), false)?;

    let addr: SocketAddr = std::env::var("RADIALS_ADDR")
        .unwrap_or_else(|_| DEFAULT_ADDR.to_string())
        .parse()
        .context("RADIALS_ADDR must be a socket address such as 127.0.0.1:3000")?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "serving radial function plots");
    println!("Serving on http://{addr}");
    axum::serve(listener, router()).await?;
    Ok(())
}
