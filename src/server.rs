use std::net::SocketAddr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, fmt};

const DEFAULT_LOG_FILTER: &str = "info";

#[derive(Debug, Parser)]
#[command(name = "repo-search", about = "Serve the GitHub user repository search page")]
pub struct ServerConfig {
    /// Address to bind the HTTP server to, overriding the Leptos site address
    #[arg(long, env = "BIND_ADDRESS")]
    pub bind: Option<SocketAddr>,
    /// Tracing filter directive, e.g. `info` or `repo_search=debug`
    #[arg(long, env = "RUST_LOG")]
    pub log_filter: Option<String>,
}

pub fn init_logging(directive: Option<&str>) -> Result<()> {
    let filter_layer = build_filter(directive)?;

    let fmt_layer = fmt::layer()
        .compact()
        .with_ansi(false)
        .with_target(false)
        .boxed();

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init()
        .context("failed to initialize tracing subscriber")?;

    Ok(())
}

fn build_filter(directive: Option<&str>) -> Result<EnvFilter> {
    let directive = directive.unwrap_or(DEFAULT_LOG_FILTER);
    EnvFilter::try_new(directive).with_context(|| format!("invalid log filter `{directive}`"))
}
