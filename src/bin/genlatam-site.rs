use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context as _;
use clap::Parser;

use genlatam::cache::ResponseCache;
use genlatam::config::Settings;
use genlatam::pages::Backends;
use genlatam::server::{self, AppState};

/// Serve the GenLatam marketing site.
#[derive(Debug, Parser)]
#[command(author, version, about)]
struct AppArgs {
    #[arg(long, default_value = "127.0.0.1:3000")]
    addr: SocketAddr,
}

#[tokio::main]
async fn main() -> std::process::ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return std::process::ExitCode::FAILURE;
    }
    std::process::ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    genlatam::logging::init()?;

    let args = AppArgs::parse();
    tracing::info!(?args, "starting genlatam-site");

    let settings = Settings::from_env();
    if settings.youtube_api_key.is_none() {
        tracing::warn!("YOUTUBE_API_KEY is not set; channel statistics disabled");
    }
    if settings.revalidate_secret.is_none() {
        tracing::info!("REVALIDATE_SECRET is not set; /api/revalidate disabled");
    }

    let http = reqwest::Client::builder()
        .build()
        .context("build http client")?;
    let cache = Arc::new(ResponseCache::new());
    let backends = Backends::new(http, &settings, cache);
    tracing::info!(cms = backends.cms.base_url(), "using cms");

    let app = server::router(AppState::new(backends, &settings));

    let listener = tokio::net::TcpListener::bind(args.addr)
        .await
        .map_err(|err| anyhow::anyhow!("bind {}: {err}", args.addr))?;
    tracing::info!(addr = %args.addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!(%err, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutting down");
}
