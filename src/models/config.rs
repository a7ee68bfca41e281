//! Configuration model loaded from external sources.

use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
/// Settings of the management console.
pub struct ConsoleConfig {
    /// Root of the store REST API, e.g. `http://localhost:5119/api`.
    pub api_base_url: String,
    /// Per-request timeout; absent means requests never time out.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
    pub templates_dir: String,
}

impl ConsoleConfig {
    /// Layers `{dir}/default`, the optional `{dir}/{app_env}` profile and
    /// `APP_*` environment variables, later sources winning.
    pub fn load(dir: &Path, app_env: &str) -> Result<Self, ConfigError> {
        let default = dir.join("default");
        let profile = dir.join(app_env);

        Config::builder()
            .add_source(File::with_name(&default.to_string_lossy()))
            .add_source(File::with_name(&profile.to_string_lossy()).required(false))
            .add_source(Environment::with_prefix("APP").try_parsing(true))
            .build()?
            .try_deserialize()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}
