use anyhow::Result;
use clap::Parser;
use kcalc_add::config::ServerConfig;
use tracing::info;

/// Crate version, with build metadata injected at compile time when the
/// release pipeline sets the corresponding env vars.
const VERSION: &str = env!("CARGO_PKG_VERSION");
const BUILD_COMMIT: &str = match option_env!("KCALC_BUILD_COMMIT") {
    Some(commit) => commit,
    None => "none",
};
const BUILD_DATE: &str = match option_env!("KCALC_BUILD_DATE") {
    Some(date) => date,
    None => "unknown",
};

#[derive(Parser, Debug)]
#[command(
    name = "kcalc-add-server",
    version = VERSION,
    about = "HTTP microservice exposing a JSON addition endpoint"
)]
struct Cli {}

#[tokio::main]
async fn main() -> Result<()> {
    let _cli = Cli::parse();

    dotenvy::dotenv().ok();
    let config = ServerConfig::from_env()?;

    kcalc_add::telemetry::init(config.log_file.as_deref())?;

    info!(
        "starting kcalc-add {} (commit {}, built {}) PORT={}",
        VERSION, BUILD_COMMIT, BUILD_DATE, config.port
    );

    kcalc_add::run_server(config).await
}
