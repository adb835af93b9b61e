//! RediCrypt CLI
//!
//! Command-line interface for the RediCrypt Redis module.

use clap::{Parser, Subcommand};
use redicrypt::{Client, ConnectionConfig};
use tracing_subscriber::{fmt, EnvFilter};

/// RediCrypt CLI
#[derive(Parser, Debug)]
#[command(name = "redicrypt-cli")]
#[command(about = "CLI for the RediCrypt Redis module")]
#[command(version)]
struct Args {
    /// Store hostname
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Store TCP port
    #[arg(long, default_value = "6379")]
    port: u16,

    /// AUTH password
    #[arg(long)]
    password: Option<String>,

    /// Index to scope operations to
    #[arg(short, long, default_value = "default")]
    index: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Store a value, encrypted, in a key
    Encrypt {
        /// The key to store under
        key: String,

        /// The value to encrypt
        value: String,
    },

    /// Print the decrypted value of a key
    Decrypt {
        /// The key to read
        key: String,
    },

    /// Store the hash of a value in a key
    Hash {
        /// Hash algorithm (e.g. sha256, whirlpool)
        hashtype: String,

        /// The key to store under
        key: String,

        /// The value to hash
        value: String,
    },

    /// Store a value base64 encoded
    B64encode {
        /// The key to store under
        key: String,

        /// The value to encode
        value: String,
    },

    /// Print the decoded value of a base64 encoded key
    B64decode {
        /// The key to read
        key: String,
    },

    /// Store an encrypted value in a base64 encoded key
    B64encrypt {
        /// The key to store under
        key: String,

        /// The value to encrypt
        value: String,
    },

    /// Print the decrypted value of a base64 encoded key
    B64decrypt {
        /// The key to read
        key: String,
    },
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,redicrypt=debug"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    let args = Args::parse();

    // Build config from args
    let mut builder = ConnectionConfig::builder()
        .host(args.host.clone())
        .port(args.port);
    if let Some(password) = &args.password {
        builder = builder.password(password.clone());
    }
    let config = builder.build();

    // Connect
    let mut client = match Client::connect(args.index.clone(), &config) {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Failed to connect to {}:{}: {}", args.host, args.port, e);
            std::process::exit(1);
        }
    };

    // Execute command
    let result = match &args.command {
        Commands::Encrypt { key, value } => client.encrypt(key, value),
        Commands::Decrypt { key } => client.decrypt(key),
        Commands::Hash { hashtype, key, value } => client.hash(hashtype, key, value),
        Commands::B64encode { key, value } => client.b64encode(key, value),
        Commands::B64decode { key } => client.b64decode(key),
        Commands::B64encrypt { key, value } => client.b64encrypt(key, value),
        Commands::B64decrypt { key } => client.b64decrypt(key),
    };

    // Print result
    match result {
        Ok(reply) => println!("{}", reply),
        Err(e) => {
            tracing::error!("Command failed: {}", e);
            std::process::exit(1);
        }
    }
}
