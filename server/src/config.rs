//! Server configuration loading
//!
//! Resolution order, later wins:
//! 1. Built-in defaults (`0.0.0.0:3000`, one worker)
//! 2. TOML file at `NUMSIGN_CONFIG`, else `~/.config/numsign/server.toml`
//! 3. `NUMSIGN_HOST` / `NUMSIGN_PORT` / `NUMSIGN_WORKERS`
//! 4. Command-line flags ([`ConfigOverrides`])

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Result, ServerError};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServerConfig {
    /// Interface to listen on
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port; 0 picks an ephemeral port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Threads pulling requests off the shared listener
    #[serde(default = "default_workers")]
    pub workers: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_workers() -> usize {
    1
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: default_workers(),
        }
    }
}

/// Command-line values; `None` keeps whatever file and env resolved.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub workers: Option<usize>,
}

impl ConfigOverrides {
    pub fn apply(&self, config: &mut ServerConfig) {
        if let Some(host) = &self.host {
            config.host.clone_from(host);
        }
        if let Some(port) = self.port {
            config.port = port;
        }
        if let Some(workers) = self.workers {
            config.workers = workers;
        }
    }
}

impl ServerConfig {
    /// Environment variable for config path override
    pub const ENV_CONFIG_PATH: &'static str = "NUMSIGN_CONFIG";
    pub const ENV_HOST: &'static str = "NUMSIGN_HOST";
    pub const ENV_PORT: &'static str = "NUMSIGN_PORT";
    pub const ENV_WORKERS: &'static str = "NUMSIGN_WORKERS";

    /// Default config filename
    pub const DEFAULT_CONFIG_FILENAME: &'static str = "server.toml";

    /// Resolve the full configuration from the process environment.
    ///
    /// File (explicit path, else the resolved default), then `NUMSIGN_*`
    /// variables, then `overrides`, then validation.
    pub fn resolve(explicit: Option<&Path>, overrides: &ConfigOverrides) -> Result<Self> {
        Self::resolve_with(explicit, overrides, |key| std::env::var(key).ok())
    }

    /// [`ServerConfig::resolve`] with environment reads going through `lookup`.
    pub fn resolve_with<F>(
        explicit: Option<&Path>,
        overrides: &ConfigOverrides,
        lookup: F,
    ) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::load_with(explicit, &lookup)?;
        overrides.apply(&mut cfg);
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load the config file, then apply environment overrides.
    ///
    /// A missing file at the default location yields defaults; a missing
    /// explicit path is an error.
    pub fn load_with<F>(explicit: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = match explicit {
            Some(path) => Self::load_from_path(path)?,
            None => {
                let path = Self::resolve_config_path(&lookup);
                if path.exists() {
                    Self::load_from_path(&path)?
                } else {
                    tracing::info!(path = %path.display(), "server config not found, using defaults");
                    Self::default()
                }
            }
        };
        cfg.apply_env_with(lookup)?;
        Ok(cfg)
    }

    /// Load configuration from a specific path
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ServerError::config_with_source(
                format!("failed to read config at {}", path.display()),
                e,
            )
        })?;
        Self::parse(&contents)
    }

    /// Parse configuration from TOML string
    pub fn parse(contents: &str) -> Result<Self> {
        let cfg: ServerConfig = toml::from_str(contents)
            .map_err(|e| ServerError::config_with_source("failed to parse config", e))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Apply `NUMSIGN_*` overrides read through `lookup`.
    pub fn apply_env_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup(Self::ENV_HOST) {
            self.host = host;
        }
        if let Some(port) = lookup(Self::ENV_PORT) {
            self.port = port.trim().parse().map_err(|e| {
                ServerError::config_with_source(format!("invalid {}: {port:?}", Self::ENV_PORT), e)
            })?;
        }
        if let Some(workers) = lookup(Self::ENV_WORKERS) {
            self.workers = workers.trim().parse().map_err(|e| {
                ServerError::config_with_source(
                    format!("invalid {}: {workers:?}", Self::ENV_WORKERS),
                    e,
                )
            })?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::config("host must not be empty"));
        }
        if self.workers == 0 {
            return Err(ServerError::config("workers must be at least 1"));
        }
        Ok(())
    }

    /// `host:port`, bracketing IPv6 literals.
    pub fn bind_addr(&self) -> String {
        if self.host.contains(':') && !self.host.starts_with('[') {
            format!("[{}]:{}", self.host, self.port)
        } else {
            format!("{}:{}", self.host, self.port)
        }
    }

    fn resolve_config_path<F>(lookup: F) -> PathBuf
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(path) = lookup(Self::ENV_CONFIG_PATH) {
            return PathBuf::from(path);
        }

        dirs::home_dir()
            .map(|h| {
                h.join(".config")
                    .join("numsign")
                    .join(Self::DEFAULT_CONFIG_FILENAME)
            })
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_CONFIG_FILENAME))
    }
}
