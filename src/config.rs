//! Configuration for the RediCrypt client
//!
//! Connection settings with sensible defaults.

/// Connection settings for the store
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Store hostname
    pub host: String,

    /// Store TCP port
    pub port: u16,

    /// Optional AUTH password
    pub password: Option<String>,
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 6379,
            password: None,
        }
    }
}

impl ConnectionConfig {
    /// Create a new config builder
    pub fn builder() -> ConnectionConfigBuilder {
        ConnectionConfigBuilder::default()
    }
}

/// Builder for ConnectionConfig
#[derive(Default)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
}

impl ConnectionConfigBuilder {
    /// Set the store hostname
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// Set the store TCP port
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// Set the AUTH password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    pub fn build(self) -> ConnectionConfig {
        self.config
    }
}
