use crate::booter::Booter;
use crate::core::config::GateConfig;
use crate::server::router::build_router;
use crate::utils::constants::TOKEN_ENV;

pub mod booter;
pub mod core;
pub mod server;
pub mod utils;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let config = GateConfig::from_env()?;
    if config.secret.is_none() {
        tracing::warn!("{} is not set, every request will be denied", TOKEN_ENV);
    }
    tracing::info!(
        "Gating access to {}",
        config.target.host_str().unwrap_or(config.target.as_str())
    );

    let router = build_router(&config);
    let booter = Booter::new(config.port).await?;
    tracing::info!("Listening on {}", booter.addr);

    booter.start(router).await
}
