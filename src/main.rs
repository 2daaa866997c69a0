mod config;
mod error;
mod routes;
mod state;
mod translate;
mod upstream;

#[cfg(test)]
mod test_support;

use anyhow::Result;
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fluentflow_backend=debug,tower_http=debug")),
        )
        .init();

    let config = load_config()?;

    // Initialize app state
    let app_state = AppState::new(config.clone())?;
    let app = routes::app(app_state);

    // Start server
    let host: std::net::IpAddr = config.server.host.parse().map_err(|e| {
        anyhow::anyhow!("Invalid server host {:?}: {}", config.server.host, e)
    })?;
    let addr = SocketAddr::from((host, config.server.port));
    info!("Starting server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// First existing file among `$CONFIG_PATH`, `conf.yaml` and `conf.json`; built-in defaults otherwise.
/// A file that exists but does not parse is an error.
fn load_config() -> Result<Config> {
    let config_paths: Vec<String> = vec![
        std::env::var("CONFIG_PATH").ok(),
        Some("conf.yaml".to_string()),
        Some("conf.json".to_string()),
    ]
    .into_iter()
    .flatten()
    .collect();

    for path in &config_paths {
        if !std::path::Path::new(path).exists() {
            tracing::debug!("No config at {}", path);
            continue;
        }
        let config = Config::load(path)
            .map_err(|e| anyhow::anyhow!("Failed to load config from {}: {}", path, e))?;
        info!("Loaded configuration from: {}", path);
        return Ok(config);
    }

    info!("No configuration file found (tried {:?}), using defaults", config_paths);
    Ok(Config::default())
}
