//! Configuration types for quarry.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file at
//! `~/.config/quarry/config.toml` (optional), and an explicit file passed on
//! the command line (required when given). [`Config::defaults`] returns the
//! embedded defaults without touching the filesystem (useful in tests).

use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind = "127.0.0.1:8080"

[assets]
root = "./webapp"

[diagnostics]
enabled = true

[engine]
kind    = "fixture"
url     = "http://127.0.0.1:9200"
fixture = "./fixtures/results.json"
"#;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("config file {0} does not exist")]
    Missing(PathBuf),
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level application configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub assets: AssetsConfig,
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
    #[serde(default)]
    pub engine: EngineConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: SocketAddr,
}

fn default_bind() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { bind: default_bind() }
    }
}

/// `[assets]` section — root of the companion web client.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    #[serde(default = "default_assets_root")]
    pub root: PathBuf,
}

fn default_assets_root() -> PathBuf {
    PathBuf::from("./webapp")
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_assets_root(),
        }
    }
}

/// `[diagnostics]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct DiagnosticsConfig {
    #[serde(default = "default_diagnostics_enabled")]
    pub enabled: bool,
}

fn default_diagnostics_enabled() -> bool {
    true
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: default_diagnostics_enabled(),
        }
    }
}

/// Which engine client the binary talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Canned results loaded from a JSON file.
    Fixture,
    /// A search engine reachable over HTTP.
    Remote,
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineKind::Fixture => write!(f, "fixture"),
            EngineKind::Remote => write!(f, "remote"),
        }
    }
}

/// `[engine]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_engine_kind")]
    pub kind: EngineKind,
    /// Base URL of the remote engine; only read when `kind = "remote"`.
    #[serde(default = "default_engine_url")]
    pub url: String,
    /// Path of the fixture file; only read when `kind = "fixture"`.
    #[serde(default = "default_engine_fixture")]
    pub fixture: PathBuf,
}

fn default_engine_kind() -> EngineKind {
    EngineKind::Fixture
}

fn default_engine_url() -> String {
    "http://127.0.0.1:9200".to_string()
}

fn default_engine_fixture() -> PathBuf {
    PathBuf::from("./fixtures/results.json")
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            kind: default_engine_kind(),
            url: default_engine_url(),
            fixture: default_engine_fixture(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the built-in defaults, then the user config file if present, then
    /// `explicit` if given. A missing `explicit` file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_from(&user_config_path(), explicit)
    }

    /// Same as [`Config::load`] with the user config location spelled out.
    pub fn load_from(user: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(user).required(false));

        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ConfigError::Missing(path.to_path_buf()));
            }
            builder = builder.add_source(config::File::from(path).required(true));
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

/// `$XDG_CONFIG_HOME/quarry/config.toml`, falling back to `~/.config`.
pub fn user_config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("quarry")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
