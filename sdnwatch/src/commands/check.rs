use anyhow::Result;
use sdnwatch_core::Services;
use tracing::*;

use crate::config::load_config;

pub(crate) async fn command(cli: &crate::Cli) -> Result<()> {
    let config = load_config(&cli.config)?;
    let services = Services::new(config)?;
    let config = services.config.lock().await;
    info!(
        http_metadata = config.metadata.enable_http,
        http_timeout = ?config.metadata.http_timeout,
        "No problems found"
    );
    Ok(())
}
