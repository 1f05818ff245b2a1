use anyhow::Result;
use sdnwatch_events::{EndpointParser, PairParser};
use tracing::*;

pub(crate) fn endpoint_command(descriptor: &str) -> Result<()> {
    let endpoint = match EndpointParser::new().parse_endpoint(descriptor) {
        Ok(endpoint) => endpoint,
        Err(error) => {
            error!(%error, "Invalid passive-mode descriptor");
            return Err(error.into());
        }
    };
    println!("{}", serde_json::to_string_pretty(&endpoint)?);
    Ok(())
}

pub(crate) fn pair_command(description: &str) -> Result<()> {
    let pair = PairParser::new().parse_pair(description);
    if pair.destination.is_none() {
        warn!("No destination in description");
    }
    println!("{}", serde_json::to_string_pretty(&pair)?);
    Ok(())
}
