use anyhow::{Context, Result};
use std::path::PathBuf;

/// Runtime settings read from defaults, `Config.toml`, then `KIT__*` env vars.
#[derive(Debug, Clone)]
pub struct Settings {
    pub host: String,
    pub port: u16,
    pub intents_file: PathBuf,
}

impl Settings {
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 8080)?
            .set_default("data.intents_file", "data/intents.json")?
            .add_source(config::File::with_name("Config").required(false))
            .add_source(config::Environment::with_prefix("KIT").separator("__"))
            .build()
            .context("Failed to build configuration")?;
        Self::from_config(&config)
    }

    fn from_config(config: &config::Config) -> Result<Self> {
        let host = config.get_string("server.host")?;
        let port = config.get_int("server.port")?;
        let port = u16::try_from(port)
            .with_context(|| format!("server.port {} out of range", port))?;
        let intents_file = config.get_string("data.intents_file")?;

        Ok(Settings {
            host,
            port,
            intents_file: PathBuf::from(intents_file),
        })
    }
}
