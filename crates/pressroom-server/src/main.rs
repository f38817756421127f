//! Pressroom server binary.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use pressroom_core::store::JsonDraftStore;
use pressroom_github::{GithubClient, GithubConfig};
use pressroom_server::{router, AppState};

#[derive(Debug, Parser)]
#[command(
    name = "pressroom-server",
    about = "Draft Markdown posts locally and publish them to a GitHub repository"
)]
struct Cli {
    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    bind: String,

    /// Port to listen on.
    #[arg(long, default_value_t = 3000)]
    port: u16,

    /// Directory holding local draft state.
    #[arg(long, default_value = ".pressroom")]
    data_dir: PathBuf,

    /// Increase log verbosity.
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();

    let default_filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .init();

    let github = GithubConfig::from_env().and_then(GithubClient::new);
    if let Err(e) = &github {
        warn!("publishing disabled: {e}");
    }

    let store = Arc::new(JsonDraftStore::new(&args.data_dir));
    let state = AppState::new(store, github);

    let addr: SocketAddr = format!("{}:{}", args.bind, args.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "pressroom listening");
    axum::serve(listener, router(state)).await?;
    Ok(())
}
