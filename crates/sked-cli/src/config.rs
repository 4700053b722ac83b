use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use sked_core::query::DEFAULT_LIST_LIMIT;

/// Default config file, looked up in the working directory.
pub const CONFIG_FILE: &str = "sked.toml";

/// Environment variable naming an alternative config file.
pub const CONFIG_PATH_ENV: &str = "SKED_CONFIG";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Maximum number of tasks a search prints
    pub list_limit: usize,
    /// Log filter used when RUST_LOG is not set
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            list_limit: DEFAULT_LIST_LIMIT,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn new() -> Result<Self, figment::Error> {
        let path = std::env::var(CONFIG_PATH_ENV).unwrap_or_else(|_| CONFIG_FILE.to_string());
        Self::figment(&path).extract()
    }

    fn figment(path: &str) -> Figment {
        Figment::from(Serialized::defaults(Config::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("SKED_").ignore(&["config"]))
    }
}
