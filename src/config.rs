use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{Result, UserError};

pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;
pub const SERVER_ENV_VAR: &str = "USER_MANAGER_SERVER";

#[derive(Deserialize, Default, Debug)]
pub struct Config {
    pub server_url: Option<String>,
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub mask_emails: bool,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        Self::parse(&contents, &config_path)
    }

    pub fn parse(contents: &str, path: &Path) -> Result<Self> {
        let config: Self = toml::from_str(contents).map_err(|e| UserError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })?;

        // A zero timeout makes reqwest fail every request immediately.
        if config.timeout_secs == Some(0) {
            return Err(UserError::InvalidTimeout("0".to_string()));
        }

        Ok(config)
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "user-manager")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserError::NoConfigDir)
    }

    /// Server URL with the `--server` flag first, then the env var, then
    /// the config file, then the built-in default.
    pub fn server_url(&self, explicit: Option<&str>) -> Result<String> {
        let env = std::env::var(SERVER_ENV_VAR).ok();
        self.resolve_server_url(explicit, env.as_deref())
    }

    fn resolve_server_url(&self, explicit: Option<&str>, env: Option<&str>) -> Result<String> {
        let raw = explicit
            .or(env)
            .or(self.server_url.as_deref())
            .unwrap_or(DEFAULT_SERVER_URL);

        let url = Url::parse(raw).map_err(|_| UserError::InvalidUrl(raw.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(UserError::InvalidUrl(raw.to_string()));
        }

        Ok(raw.to_string())
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS))
    }
}
