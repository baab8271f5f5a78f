use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::downstream::CallTimeouts;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub core: CoreConfig,
    pub timeouts: TimeoutConfig,
    pub shutdown: ShutdownConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Where the core gRPC service lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    pub endpoint: String,
    pub connect_timeout_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeoutConfig {
    pub standard_secs: u64,
    /// Budget for bulk data transformation.
    pub extended_secs: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShutdownConfig {
    pub drain_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://127.0.0.1:50051".to_string(),
            connect_timeout_secs: 5,
        }
    }
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self {
            standard_secs: 30,
            extended_secs: 300,
        }
    }
}

impl Default for ShutdownConfig {
    fn default() -> Self {
        Self {
            drain_timeout_secs: 30,
        }
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional config file and the
    /// environment, in that order of precedence (later wins).
    pub fn load() -> anyhow::Result<Self> {
        let mut config = config::Config::builder();

        // Add default configuration
        config = config.add_source(config::Config::try_from(&AppConfig::default())?);

        // Add config file if it exists
        config = config.add_source(config::File::with_name("config").required(false));

        // Environment variables, e.g. CLIENT_API__SERVER__PORT=9000
        config = config.add_source(
            config::Environment::with_prefix("CLIENT_API")
                .prefix_separator("__")
                .separator("__"),
        );

        let config = config.build()?;
        let app_config: AppConfig = config.try_deserialize()?;

        Ok(app_config)
    }

    /// Get the server bind address
    pub fn server_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    pub fn call_timeouts(&self) -> CallTimeouts {
        CallTimeouts {
            standard: Duration::from_secs(self.timeouts.standard_secs),
            extended: Duration::from_secs(self.timeouts.extended_secs),
        }
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.core.connect_timeout_secs)
    }

    pub fn drain_timeout(&self) -> Duration {
        Duration::from_secs(self.shutdown.drain_timeout_secs)
    }
}
