//! RediCrypt Client
//!
//! One public method per store operation, all forwarding through a single
//! dispatch helper that composes the wire command.

use crate::commands::{self, CommandKind};
use crate::config::ConnectionConfig;
use crate::connection::{Connection, RedisConnection};
use crate::error::{RediCryptError, Result};

/// Client for the RediCrypt Redis module
///
/// Holds an index name (opaque client-side metadata, never sent on the
/// wire) and one connection for its lifetime.
///
/// Arguments are forwarded literally, with no escaping or quoting: a value
/// containing whitespace is split into multiple wire arguments by the
/// store. Callers that need whitespace-safe values must encode them first.
pub struct Client {
    /// Index this client is scoped to
    index_name: String,

    /// Connection used for every command
    conn: Box<dyn Connection>,
}

impl Client {
    /// Connect to the store and create a client scoped to `index_name`
    ///
    /// Fails only if the underlying connection cannot be established.
    pub fn connect(index_name: impl Into<String>, config: &ConnectionConfig) -> Result<Self> {
        let conn = RedisConnection::connect(config)?;
        Ok(Self::with_connection(index_name, conn))
    }

    /// Create a client over a pre-built connection
    ///
    /// The supplied handle is used for every subsequent call; no new
    /// connection is ever constructed.
    pub fn with_connection(
        index_name: impl Into<String>,
        conn: impl Connection + 'static,
    ) -> Self {
        Self {
            index_name: index_name.into(),
            conn: Box::new(conn),
        }
    }

    /// The index this client is scoped to
    pub fn index_name(&self) -> &str {
        &self.index_name
    }

    // =========================================================================
    // Store Operations
    // =========================================================================

    /// Store a value, encrypted, in a key
    pub fn encrypt(&mut self, key: &str, value: &str) -> Result<String> {
        self.run(CommandKind::Encrypt, &[key, value])
    }

    /// Returns the decrypted value of a key
    pub fn decrypt(&mut self, key: &str) -> Result<String> {
        self.run(CommandKind::Decrypt, &[key])
    }

    /// Store the hash of a value in a key, using the given algorithm
    ///
    /// `hashtype` must be one of [`commands::SUPPORTED_HASHES`]
    /// (case-sensitive).
    pub fn hash(&mut self, hashtype: &str, key: &str, value: &str) -> Result<String> {
        if !commands::is_supported_hash(hashtype) {
            return Err(RediCryptError::UnsupportedHash(hashtype.to_string()));
        }
        self.run(CommandKind::Hash, &[hashtype, key, value])
    }

    /// Given a value, store it base64 encoded
    pub fn b64encode(&mut self, key: &str, value: &str) -> Result<String> {
        self.run(CommandKind::B64Encode, &[key, value])
    }

    /// Return the decoded value from a base64 encoded key
    pub fn b64decode(&mut self, key: &str) -> Result<String> {
        self.run(CommandKind::B64Decode, &[key])
    }

    /// Store an encrypted value, in a base64 encoded key
    pub fn b64encrypt(&mut self, key: &str, value: &str) -> Result<String> {
        self.run(CommandKind::B64Encrypt, &[key, value])
    }

    /// Return the decrypted value of a base64 encoded key
    pub fn b64decrypt(&mut self, key: &str) -> Result<String> {
        self.run(CommandKind::B64Decrypt, &[key])
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// Compose and execute a wire command
    ///
    /// The command is the operation's wire string followed by each argument
    /// value, space-joined, values taken literally.
    fn run(&mut self, kind: CommandKind, args: &[&str]) -> Result<String> {
        let mut command = String::from(kind.wire_command());
        for arg in args {
            command.push(' ');
            command.push_str(arg);
        }

        // Argument values may be secrets; log the command and arity only.
        tracing::debug!(
            "Dispatching {} ({} args) for index {}",
            kind.wire_command(),
            args.len(),
            self.index_name
        );

        self.conn.execute(&command)
    }
}
