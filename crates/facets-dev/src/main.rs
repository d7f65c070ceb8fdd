use anyhow::Context;
use clap::Parser;
use facets_dev::server::{router, ServeConfig};
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Serve the demo pages over plain HTTP for local testing.
#[derive(Parser, Debug)]
#[command(name = "facets-dev", version, about)]
struct Args {
    /// Port to listen on
    #[arg(long, default_value_t = 8080)]
    port: u16,

    /// Directory to serve files from
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// File served for the bare `/` path
    #[arg(long, default_value = "card.html")]
    index: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let addr = SocketAddr::from(([127, 0, 0, 1], args.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr} (is the port already in use?)"))?;

    tracing::info!(%addr, root = %args.root.display(), index = %args.index, "test server running");

    let app = router(ServeConfig {
        root: args.root,
        index: args.index,
    });
    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
