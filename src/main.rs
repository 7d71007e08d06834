use std::path::Path;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use wrexbot::BotConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .init();

    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "wrexbot.toml".to_string());

    let config = if Path::new(&config_path).exists() {
        BotConfig::load(&config_path).map_err(|e| {
            error!(path = %config_path, error = %e, "Failed to load config");
            e
        })?
    } else {
        warn!(path = %config_path, "Config file not found, using defaults");
        BotConfig::default()
    };

    info!(
        server = %config.address(),
        nick = %config.nick,
        plugins = ?config.plugins,
        "Starting wrexbot"
    );

    wrexbot::client::run(&config).await?;
    Ok(())
}
