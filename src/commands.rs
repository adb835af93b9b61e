//! Command Table
//!
//! Maps each client operation to its RediCrypt wire command and defines
//! the set of hash algorithms the store accepts.

/// Operations exposed by the RediCrypt module
///
/// Each operation has exactly one wire command; `wire_command` matches
/// exhaustively, so a variant without a mapping does not compile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    /// Store a value encrypted
    Encrypt,

    /// Read a value back decrypted
    Decrypt,

    /// Store the hash of a value
    Hash,

    /// Store a value base64 encoded
    B64Encode,

    /// Read a base64 encoded value back decoded
    B64Decode,

    /// Store a value encrypted, base64 encoded
    B64Encrypt,

    /// Read a base64 encoded value back decrypted
    B64Decrypt,
}

impl CommandKind {
    /// Every operation, in wire-command order
    pub const ALL: [CommandKind; 7] = [
        CommandKind::Encrypt,
        CommandKind::Decrypt,
        CommandKind::Hash,
        CommandKind::B64Encode,
        CommandKind::B64Decode,
        CommandKind::B64Encrypt,
        CommandKind::B64Decrypt,
    ];

    /// The wire command string sent to the store for this operation
    pub fn wire_command(&self) -> &'static str {
        match self {
            CommandKind::Encrypt => "RC.SETENC",
            CommandKind::Decrypt => "RC.GETENC",
            CommandKind::Hash => "RC.SETHASH",
            CommandKind::B64Encode => "RC.SETB64",
            CommandKind::B64Decode => "RC.GETB64",
            CommandKind::B64Encrypt => "RC.BSETENC",
            CommandKind::B64Decrypt => "RC.BGETENC",
        }
    }
}

/// Hash algorithms the store accepts for `RC.SETHASH` (case-sensitive)
pub const SUPPORTED_HASHES: [&str; 8] = [
    "sha1",
    "sha224",
    "sha256",
    "sha3-224",
    "sha3-256",
    "sha3-384",
    "sha3-512",
    "whirlpool",
];

/// Check whether a hash algorithm identifier is supported by the store
pub fn is_supported_hash(hashtype: &str) -> bool {
    SUPPORTED_HASHES.contains(&hashtype)
}
