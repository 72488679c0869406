use serde::{Deserialize, Serialize};

use super::assets::AssetsConfig;
use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::lookup::LookupConfig;
use super::server::ServerConfig;

/// Main configuration structure for the lookup service
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Web server configuration (port, bind address)
    #[serde(default)]
    pub server: ServerConfig,

    /// Lookup budgets, DoH endpoint table and root hints
    #[serde(default)]
    pub lookup: LookupConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,

    /// Static asset layer
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dns-lookup.toml in current directory
    /// 3. /etc/dns-lookup/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = if let Some(path) = path {
            Self::from_file(path)?
        } else if std::path::Path::new("dns-lookup.toml").exists() {
            Self::from_file("dns-lookup.toml")?
        } else if std::path::Path::new("/etc/dns-lookup/config.toml").exists() {
            Self::from_file("/etc/dns-lookup/config.toml")?
        } else {
            Self::default()
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(port) = overrides.web_port {
            self.server.web_port = port;
        }
        if let Some(bind) = overrides.bind_address {
            self.server.bind_address = bind;
        }
        if let Some(dir) = overrides.static_dir {
            self.assets.static_dir = Some(dir);
        }
        if overrides.no_assets {
            self.assets.static_dir = None;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.web_port == 0 {
            return Err(ConfigError::Validation("Web port cannot be 0".to_string()));
        }

        if self.lookup.timeout_ms == 0 {
            return Err(ConfigError::Validation(
                "Lookup timeout cannot be 0".to_string(),
            ));
        }

        if self.lookup.retries == 0 {
            return Err(ConfigError::Validation(
                "Lookup retries must be at least 1".to_string(),
            ));
        }

        if self.lookup.root_servers.is_empty() {
            return Err(ConfigError::Validation(
                "No root servers configured".to_string(),
            ));
        }

        if let Some(bad) = self.lookup.root_servers.iter().find(|server| {
            server.parse::<std::net::IpAddr>().is_err()
                && server.parse::<std::net::SocketAddr>().is_err()
        }) {
            return Err(ConfigError::Validation(format!(
                "Root server '{}' is not an IP address",
                bad
            )));
        }

        for (resolver, url) in &self.lookup.doh_endpoints {
            if !url.starts_with("https://") {
                return Err(ConfigError::Validation(format!(
                    "DoH endpoint for '{}' must be an https:// URL, got '{}'",
                    resolver, url
                )));
            }
        }

        Ok(())
    }
}

/// Command-line overrides for configuration
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub web_port: Option<u16>,
    pub bind_address: Option<String>,
    pub static_dir: Option<String>,
    pub no_assets: bool,
    pub log_level: Option<String>,
}
