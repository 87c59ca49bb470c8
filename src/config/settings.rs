//! Process settings read from the environment (after `.env` is loaded by the binary).

use crate::config::presets;
use crate::error::ConfigError;
use std::path::PathBuf;

pub const DEFAULT_MONGODB_URI: &str = "mongodb://localhost:27017";
pub const DEFAULT_PORT: u16 = 3001;
pub const DEFAULT_STATIC_DIR: &str = "public";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StoreKind {
    Mongo,
    Memory,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub mongodb_uri: String,
    pub port: u16,
    /// Preset name used when `config_path` is unset.
    pub domain: String,
    pub config_path: Option<PathBuf>,
    /// Overrides the database named by the resource config.
    pub database_name: Option<String>,
    pub static_dir: PathBuf,
    pub store: StoreKind,
    /// Answer malformed ids with 400 instead of the generic 500.
    pub strict_ids: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            mongodb_uri: DEFAULT_MONGODB_URI.into(),
            port: DEFAULT_PORT,
            domain: presets::RENTAL.into(),
            config_path: None,
            database_name: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            store: StoreKind::Mongo,
            strict_ids: false,
        }
    }
}

impl Settings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build settings from an arbitrary variable source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |name: &str| lookup(name).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let defaults = Settings::default();

        let port = match var("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Setting {
                name: "PORT",
                message: format!("'{}' is not a valid port", raw),
            })?,
            None => defaults.port,
        };
        let store = match var("GATEWAY_STORE").as_deref() {
            None | Some("mongo") | Some("mongodb") => StoreKind::Mongo,
            Some("memory") => StoreKind::Memory,
            Some(other) => {
                return Err(ConfigError::Setting {
                    name: "GATEWAY_STORE",
                    message: format!("expected 'mongo' or 'memory', got '{}'", other),
                })
            }
        };
        let strict_ids = match var("GATEWAY_STRICT_IDS") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| ConfigError::Setting {
                name: "GATEWAY_STRICT_IDS",
                message: format!("'{}' is not a boolean", raw),
            })?,
            None => defaults.strict_ids,
        };

        Ok(Settings {
            mongodb_uri: var("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            port,
            domain: var("GATEWAY_DOMAIN").unwrap_or(defaults.domain),
            config_path: var("GATEWAY_CONFIG").map(PathBuf::from),
            database_name: var("DATABASE_NAME"),
            static_dir: var("STATIC_DIR").map(PathBuf::from).unwrap_or(defaults.static_dir),
            store,
            strict_ids,
        })
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
