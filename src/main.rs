use std::net::SocketAddr;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;
use nlat_engine::api::{create_router, AppState};
use nlat_engine::config::ConfigLoader;
use nlat_engine::telemetry;
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "nlat-engine",
    about = "Serve the workplace-accident compensation calculators over HTTP",
    version
)]
struct Cli {
    /// Configuration directory containing engine.yaml
    #[arg(long, default_value = "./config/nlat")]
    config: PathBuf,
    /// Address to bind the HTTP server to
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    /// Port for the HTTP server
    #[arg(long, default_value_t = 3000)]
    port: u16,
    /// Log level or filter directive; RUST_LOG takes precedence
    #[arg(long, default_value = "info")]
    log_level: String,
    /// Pin the evaluation date for accrued amounts (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    today: Option<NaiveDate>,
}

fn parse_date(raw: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .map_err(|err| format!("invalid date '{raw}': {err}"))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    telemetry::init(&cli.log_level)?;

    let config = ConfigLoader::load(&cli.config)?;
    info!(
        config = %cli.config.display(),
        regime = %config.engine().name,
        reference_year = config.settings().reference_year,
        "Configuration loaded"
    );

    let mut state = AppState::new(config);
    if let Some(today) = cli.today {
        state = state.with_fixed_date(today);
    }

    let addr: SocketAddr = format!("{}:{}", cli.host, cli.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "Listening");
    axum::serve(listener, create_router(state)).await?;
    Ok(())
}
