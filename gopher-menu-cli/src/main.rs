mod cli;
mod config;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use config::CliConfig;
use gopher_menu_core::GopherClient;

const DEFAULT_HOST: &str = "gopher.floodgap.com";
const DEFAULT_PORT: u16 = 70;

/// Fetch a Gopher menu and print its parsed entries.
///
/// With no arguments, requests the root menu of the demonstration host.
/// Output is auto-JSON when stdout is piped. Force with --json.
#[derive(Parser, Debug)]
#[command(name = "gopher-menu", version)]
struct Args {
    /// Gopher server to query
    host: Option<String>,

    /// Server port
    #[arg(short, long)]
    port: Option<u16>,

    /// Selector to request; empty requests the root menu
    #[arg(short, long)]
    selector: Option<String>,

    /// Force JSON output (auto-enabled when stdout is piped)
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    // Tracing to stderr — never pollutes stdout
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_ansi(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = CliConfig::load();
    let json = cli::use_json(args.json);

    if let Err(err) = run(args, config).await {
        cli::handle_error(err, json);
    }
}

async fn run(args: Args, config: CliConfig) -> Result<()> {
    let host = args
        .host
        .or(config.host)
        .unwrap_or_else(|| DEFAULT_HOST.to_string());
    let port = args.port.or(config.port).unwrap_or(DEFAULT_PORT);
    let selector = args.selector.or(config.selector).unwrap_or_default();
    let json = cli::use_json(args.json);

    info!(host = %host, port = %port, selector = %selector, "fetching menu");
    let entries = GopherClient::fetch_menu(&host, port, &selector)
        .await
        .with_context(|| format!("Failed to fetch menu from {}:{}", host, port))?;

    cli::print_entries(&entries, json)
}
