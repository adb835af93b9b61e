//! Client Dispatch Tests
//!
//! Exercises every public operation against a recording connection and
//! asserts the exact composed wire command.

use std::cell::RefCell;
use std::rc::Rc;

use redicrypt::commands::SUPPORTED_HASHES;
use redicrypt::connection::Connection;
use redicrypt::error::{RediCryptError, Result};
use redicrypt::Client;

// =============================================================================
// Test Connections
// =============================================================================

/// Records every command line it is asked to execute
struct RecordingConnection {
    commands: Rc<RefCell<Vec<String>>>,
    reply: String,
}

impl RecordingConnection {
    fn new() -> (Self, Rc<RefCell<Vec<String>>>) {
        Self::with_reply("OK")
    }

    fn with_reply(reply: &str) -> (Self, Rc<RefCell<Vec<String>>>) {
        let commands = Rc::new(RefCell::new(Vec::new()));
        let conn = Self {
            commands: Rc::clone(&commands),
            reply: reply.to_string(),
        };
        (conn, commands)
    }
}

impl Connection for RecordingConnection {
    fn execute(&mut self, command: &str) -> Result<String> {
        self.commands.borrow_mut().push(command.to_string());
        Ok(self.reply.clone())
    }
}

/// Fails every command with a transport error
struct FailingConnection;

impl Connection for FailingConnection {
    fn execute(&mut self, _command: &str) -> Result<String> {
        let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "connection refused");
        Err(RediCryptError::Redis(io.into()))
    }
}

// =============================================================================
// Wire Command Composition Tests
// =============================================================================

#[test]
fn test_encrypt_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.encrypt("k", "v").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.SETENC k v"]);
}

#[test]
fn test_decrypt_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.decrypt("k").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.GETENC k"]);
}

#[test]
fn test_hash_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.hash("sha256", "k", "v").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.SETHASH sha256 k v"]);
}

#[test]
fn test_b64encode_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.b64encode("k", "v").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.SETB64 k v"]);
}

#[test]
fn test_b64decode_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.b64decode("k").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.GETB64 k"]);
}

#[test]
fn test_b64encrypt_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.b64encrypt("k", "v").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.BSETENC k v"]);
}

#[test]
fn test_b64decrypt_command() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.b64decrypt("k").unwrap();

    assert_eq!(commands.borrow().as_slice(), ["RC.BGETENC k"]);
}

// =============================================================================
// Hash Validation Tests
// =============================================================================

#[test]
fn test_hash_rejects_unsupported_type() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    let err = client.hash("md5", "k", "v").unwrap_err();

    match err {
        RediCryptError::UnsupportedHash(hashtype) => assert_eq!(hashtype, "md5"),
        other => panic!("Expected UnsupportedHash, got {:?}", other),
    }

    // Nothing reaches the wire when validation fails
    assert!(commands.borrow().is_empty());
}

#[test]
fn test_hash_accepts_every_supported_type() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    for hashtype in SUPPORTED_HASHES {
        client.hash(hashtype, "k", "v").unwrap();
    }

    let expected: Vec<String> = SUPPORTED_HASHES
        .iter()
        .map(|h| format!("RC.SETHASH {} k v", h))
        .collect();
    assert_eq!(*commands.borrow(), expected);
}

// =============================================================================
// Argument Joining Tests
// =============================================================================

#[test]
fn test_value_with_spaces_joins_literally() {
    // Arguments are joined with no escaping: a value containing whitespace
    // is split into multiple wire arguments by the store. Two arguments in,
    // three wire tokens out (after the command).
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.encrypt("k", "a b").unwrap();

    let commands = commands.borrow();
    assert_eq!(commands.as_slice(), ["RC.SETENC k a b"]);
    assert_eq!(commands[0].split(' ').count(), 4);
}

// =============================================================================
// Connection Handling Tests
// =============================================================================

#[test]
fn test_presupplied_connection_is_used_for_every_call() {
    let (conn, commands) = RecordingConnection::new();
    let mut client = Client::with_connection("idx", conn);

    client.encrypt("k", "v").unwrap();
    client.decrypt("k").unwrap();
    client.b64encode("k", "v").unwrap();

    // All three calls landed on the handle supplied at construction
    assert_eq!(
        commands.borrow().as_slice(),
        ["RC.SETENC k v", "RC.GETENC k", "RC.SETB64 k v"]
    );
}

#[test]
fn test_reply_passes_through_unmodified() {
    let (conn, _) = RecordingConnection::with_reply("s3cret");
    let mut client = Client::with_connection("idx", conn);

    assert_eq!(client.decrypt("k").unwrap(), "s3cret");
}

#[test]
fn test_transport_errors_propagate() {
    let mut client = Client::with_connection("idx", FailingConnection);

    let err = client.encrypt("k", "v").unwrap_err();

    assert!(matches!(err, RediCryptError::Redis(_)));
}

#[test]
fn test_index_name_is_retained() {
    let (conn, _) = RecordingConnection::new();
    let client = Client::with_connection("user-index", conn);

    assert_eq!(client.index_name(), "user-index");
}
