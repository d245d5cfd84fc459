use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

use genlatam::cli::{Cli, Command};
use genlatam::config::Settings;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    genlatam::logging::init().context("init logging")?;

    let cli = Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    match cli.command {
        Command::Fetch { target } => {
            let settings = Settings::from_env();
            genlatam::inspect::fetch(target, &settings)
                .await
                .context("fetch")?;
        }
        Command::Stats(args) => {
            let settings = Settings::from_env();
            genlatam::inspect::stats(args, &settings)
                .await
                .context("stats")?;
        }
        Command::Growth(args) => {
            genlatam::inspect::growth(args).context("growth")?;
        }
    }

    Ok(())
}
