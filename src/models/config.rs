//! Configuration model loaded from external sources.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub store_dir: String,
    pub zmq_address: String,
    #[serde(default)]
    pub lexicon_file: Option<String>,
}

impl ServerConfig {
    /// Load configuration from the process environment (`STORE_DIR`,
    /// `ZMQ_ADDRESS`, `LEXICON_FILE`), with defaults for everything but the
    /// lexicon file.
    pub fn load() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .set_default("store_dir", "data")?
            .set_default("zmq_address", "tcp://127.0.0.1:5555")?
            .add_source(config::Environment::default())
            .build()?
            .try_deserialize()
    }
}
