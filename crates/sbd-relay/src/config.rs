//! Configuration for the relay.

use anyhow::{Context, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::path::PathBuf;

/// Relay configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// RockBLOCK account
    pub rockblock: RockblockConfig,

    /// Twilio account
    pub twilio: TwilioConfig,

    /// Device ⇄ phone directory
    #[serde(default)]
    pub directory: DirectoryConfig,

    /// Relay behaviour
    #[serde(default)]
    pub relay: RelayConfig,

    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Logging configuration
    #[serde(default)]
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RockblockConfig {
    pub username: String,

    pub password: SecretString,

    /// RockBLOCK web services URL
    #[serde(default = "default_rockblock_url")]
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TwilioConfig {
    pub account_sid: String,

    /// Also the key for webhook signatures
    pub auth_token: SecretString,

    /// Number SMS are sent from
    pub phone_number: String,

    /// Twilio REST API URL
    #[serde(default = "default_twilio_url")]
    pub base_url: String,

    /// Public URL Twilio posts to, if it differs from `https://<Host>`
    #[serde(default)]
    pub public_base_url: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    /// JSON file mapping IMEI to phone number
    #[serde(default = "default_directory_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RelayConfig {
    /// Answer Twilio with 500 when the RockBLOCK call fails in transport
    #[serde(default)]
    pub surface_mt_transport_errors: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server listen address
    #[serde(default = "default_listen_addr")]
    pub listen_addr: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for DirectoryConfig {
    fn default() -> Self {
        Self {
            path: default_directory_path(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: default_listen_addr(),
            port: default_port(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_rockblock_url() -> String {
    rockblock_client::DEFAULT_BASE_URL.into()
}

fn default_twilio_url() -> String {
    twilio_client::DEFAULT_BASE_URL.into()
}

fn default_directory_path() -> PathBuf {
    PathBuf::from("directory.json")
}

fn default_listen_addr() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    8080
}

fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Nested keys use `__`, e.g. `TWILIO__AUTH_TOKEN`.
    pub fn load() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .separator("__")
                    .try_parsing(false),
            )
            .build()
            .context("Failed to build configuration")?;

        Self::from_config(config)
    }

    fn from_config(config: config::Config) -> Result<Self> {
        config
            .try_deserialize()
            .context("Failed to deserialize configuration")
    }
}
