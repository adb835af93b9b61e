//! Connection Handling
//!
//! The seam between the dispatch layer and the network: `Connection` is the
//! one-method trait the client drives, `RedisConnection` the production
//! implementation over the `redis` crate.

use crate::config::ConnectionConfig;
use crate::error::Result;

/// Executes raw command lines against the store
///
/// A command line is a wire command followed by its space-joined arguments,
/// e.g. `RC.SETENC mykey myvalue`.
pub trait Connection {
    /// Execute one command line and return the store's reply as text
    ///
    /// Status replies decode to `"OK"`, bulk replies to their string form.
    fn execute(&mut self, command: &str) -> Result<String>;
}

/// Production connection backed by the `redis` crate
///
/// Holds exactly one `redis::Connection` for its lifetime. Pooling,
/// reconnection, and authentication are whatever the `redis` crate
/// provides; nothing is layered on top.
pub struct RedisConnection {
    conn: redis::Connection,
}

impl RedisConnection {
    /// Connect to the store described by `config`
    pub fn connect(config: &ConnectionConfig) -> Result<Self> {
        let info = redis::ConnectionInfo {
            addr: redis::ConnectionAddr::Tcp(config.host.clone(), config.port),
            redis: redis::RedisConnectionInfo {
                password: config.password.clone(),
                ..Default::default()
            },
        };

        let client = redis::Client::open(info)?;
        let conn = client.get_connection()?;

        tracing::debug!("Connected to {}:{}", config.host, config.port);

        Ok(Self { conn })
    }
}

impl Connection for RedisConnection {
    fn execute(&mut self, command: &str) -> Result<String> {
        // The store tokenizes the joined line on whitespace; split the same
        // way here so each token travels as its own RESP argument.
        let mut parts = command.split_whitespace();

        let mut cmd = redis::cmd(parts.next().unwrap_or(""));
        for arg in parts {
            cmd.arg(arg);
        }

        Ok(cmd.query::<String>(&mut self.conn)?)
    }
}
