use std::path::Path;

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use sdnwatch_common::{SdnwatchConfig, SinkConfig};
use tracing::*;

/// Overrides such as `SDNWATCH_SINK__URL`: a single `_` after the prefix,
/// `__` between nested keys
fn environment() -> Environment {
    Environment::with_prefix("SDNWATCH")
        .prefix_separator("_")
        .separator("__")
}

pub fn load_config(path: &Path) -> Result<SdnwatchConfig> {
    let config: SdnwatchConfig = Config::builder()
        .add_source(File::from(path))
        .add_source(environment())
        .build()
        .context("Could not load config")?
        .try_deserialize()
        .context("Could not parse config")?;

    config.validate().context("Invalid config")?;

    let sink = match config.sink {
        SinkConfig::Log => "log".to_owned(),
        SinkConfig::Http(ref http) => http.url.to_string(),
    };
    info!(
        "Using config: {path:?} (sink: {sink}, http metadata: {})",
        config.metadata.enable_http,
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn from_env(vars: &[(&str, &str)]) -> SdnwatchConfig {
        let mut env = config::Map::new();
        for (key, value) in vars {
            env.insert(key.to_string(), value.to_string());
        }
        Config::builder()
            .add_source(environment().source(Some(env)))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn test_env_overrides_nested_keys() {
        let config = from_env(&[
            ("SDNWATCH_SINK__TYPE", "http"),
            ("SDNWATCH_SINK__URL", "http://provisioner.local/api"),
        ]);
        let SinkConfig::Http(http) = config.sink else {
            panic!("expected an http sink");
        };
        assert_eq!(http.url.as_str(), "http://provisioner.local/api");
    }

    #[test]
    fn test_double_underscore_after_prefix_is_not_an_override() {
        let config = from_env(&[("SDNWATCH__SINK__TYPE", "http")]);
        assert_eq!(config.sink, SinkConfig::Log);
    }
}
