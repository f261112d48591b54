//! # Configuration
//!
//! Configuration management for the fare aggregator.
//!
//! Settings load from an optional TOML file plus environment variable
//! overrides with the `FARE` prefix (for example `FARE_AUTH__TOKEN` or
//! `FARE_SERVER__PORT`). Provider endpoints resolve here, once, at
//! startup; request handling never consults the environment.

use anyhow::{Context, Result};
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration for the service.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Caller authentication settings.
    #[serde(default)]
    pub auth: AuthSettings,
    /// Provider endpoint settings.
    #[serde(default)]
    pub providers: ProvidersConfig,
    /// Aggregation settings.
    #[serde(default)]
    pub aggregation: AggregationSettings,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Bind address.
    #[serde(default = "default_host")]
    pub host: String,
    /// Bind port.
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Caller authentication settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AuthSettings {
    /// Expected caller token. Unset means every request fails with a
    /// misconfiguration error (500), never open access.
    pub token: Option<String>,
}

/// Settings for both provider clients.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProvidersConfig {
    /// Lyft client settings.
    #[serde(default)]
    pub lyft: ProviderSettings,
    /// Uber client settings.
    #[serde(default)]
    pub uber: ProviderSettings,
}

/// Settings for one provider client.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderSettings {
    /// Base URL override; each client falls back to the provider's
    /// public API host.
    pub endpoint: Option<String>,
    /// Credential presented to the provider.
    pub token: Option<String>,
    /// Request timeout in milliseconds; unset waits indefinitely.
    pub timeout_ms: Option<u64>,
}

/// Aggregation settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AggregationSettings {
    /// Service-level per-provider timeout in milliseconds; unset
    /// preserves the unbounded-wait default.
    pub per_provider_timeout_ms: Option<u64>,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug, trace).
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log format (pretty or json).
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl ServiceConfig {
    /// Loads configuration from `config.toml` (if present) and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be read or validation
    /// fails.
    pub fn load() -> Result<Self> {
        Self::load_from_path(None)
    }

    /// Loads configuration from the specified file path and the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the sources cannot be read or validation
    /// fails.
    pub fn load_from_path(config_path: Option<PathBuf>) -> Result<Self> {
        let config_file = config_path.unwrap_or_else(|| PathBuf::from("config.toml"));

        let mut builder = Config::builder();
        if config_file.exists() {
            builder = builder.add_source(
                File::from(config_file)
                    .required(false)
                    .format(config::FileFormat::Toml),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("FARE")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .with_context(|| "Failed to build configuration")?;

        let config: ServiceConfig = settings
            .try_deserialize()
            .with_context(|| "Failed to deserialize configuration")?;

        config.validate()?;
        Ok(config)
    }

    /// Validates all configuration settings.
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid setting.
    pub fn validate(&self) -> Result<()> {
        let valid_log_levels = ["error", "warn", "info", "debug", "trace"];
        if !valid_log_levels.contains(&self.logging.level.as_str()) {
            anyhow::bail!(
                "Invalid log level '{}'. Must be one of: {}",
                self.logging.level,
                valid_log_levels.join(", ")
            );
        }

        let valid_log_formats = ["pretty", "json"];
        if !valid_log_formats.contains(&self.logging.format.as_str()) {
            anyhow::bail!(
                "Invalid log format '{}'. Must be one of: {}",
                self.logging.format,
                valid_log_formats.join(", ")
            );
        }

        for (name, provider) in [("lyft", &self.providers.lyft), ("uber", &self.providers.uber)] {
            if let Some(endpoint) = &provider.endpoint {
                if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                    anyhow::bail!(
                        "Provider '{}' endpoint must be an HTTP or HTTPS URL, got '{}'",
                        name,
                        endpoint
                    );
                }
            }
        }

        Ok(())
    }
}
