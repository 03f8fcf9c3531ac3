use std::error::Error as _;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UserError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server returned status {status}")]
    Server { status: u16 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Name and email are both required")]
    MissingFields,

    #[error("User not found: {0}")]
    UserNotFound(i64),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Failed to read config file at {path}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid timeout: {0:?} (expected a whole number of seconds above zero)")]
    InvalidTimeout(String),

    #[error("Failed to write config file at {path}: {source}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Could not determine config directory")]
    NoConfigDir,
}

impl UserError {
    /// Display text followed by every source in the chain, `: `-separated.
    /// Transport errors start from reqwest's own message.
    ///
    /// reqwest keeps the OS-level cause ("Connection refused") a couple of
    /// levels down the chain.
    pub fn reason(&self) -> String {
        let (mut reason, mut source) = match self {
            UserError::Transport(e) => (e.to_string(), e.source()),
            other => (other.to_string(), other.source()),
        };
        while let Some(cause) = source {
            let cause_text = cause.to_string();
            if !reason.contains(&cause_text) {
                reason.push_str(": ");
                reason.push_str(&cause_text);
            }
            source = cause.source();
        }
        reason
    }
}

pub type Result<T> = std::result::Result<T, UserError>;
