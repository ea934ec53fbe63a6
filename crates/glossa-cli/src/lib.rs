pub mod cli;
pub mod client;
pub mod commands;
pub mod render;

use std::ffi::OsString;

use anyhow::Context;
use clap::Parser;
use tracing::{debug, info};

#[tracing::instrument(skip_all)]
pub fn run(raw_args: Vec<OsString>) -> anyhow::Result<()> {
    let cli = cli::GlobalCli::parse_from(raw_args);

    cli::init_tracing(cli.verbose, cli.quiet)?;

    info!(
        verbose = cli.verbose,
        quiet = cli.quiet,
        "starting glossa CLI"
    );
    debug!(overrides = ?cli.overrides, "config overrides");

    let cfg = cli::load_config(cli.config.as_deref(), &cli.overrides)?;
    let client = client::HttpClient::new(&cfg.api.base_url, cli.token.clone())?;
    let renderer = render::Renderer::new();

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to start async runtime")?;
    runtime.block_on(commands::dispatch(&client, &cfg, &renderer, cli.command))?;

    info!("done");
    Ok(())
}
