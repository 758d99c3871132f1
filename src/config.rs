//! Service configuration
//!
//! Every option can be given as a flag or through the environment
//! (a `.env` file is loaded first).
//!
//! Environment:
//!   VIDEOHUB_BIND - Listen address (default: 0.0.0.0:8000)
//!   VIDEOHUB_TOKEN_BYTES - Random bytes per session token (default: 32)
//!   VIDEOHUB_CORS_PERMISSIVE - Allow any origin (default: true)
//!   RUST_LOG - Log filter (default: videohub_backend=debug,tower_http=debug)

use anyhow::{ensure, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::path::Path;

use crate::auth::token::{TokenGenerator, DEFAULT_TOKEN_BYTES};

/// Upper bound on token size; keeps headers well under proxy limits
pub const MAX_TOKEN_BYTES: usize = 512;

#[derive(Parser, Debug, Clone)]
#[command(name = "videohub")]
#[command(about = "Token-gated video catalogue API")]
pub struct Config {
    /// Address to listen on
    #[arg(long, env = "VIDEOHUB_BIND", default_value = "0.0.0.0:8000")]
    pub bind: SocketAddr,

    /// Random bytes per session token (hex-encoded to twice this length)
    #[arg(long, env = "VIDEOHUB_TOKEN_BYTES", default_value_t = DEFAULT_TOKEN_BYTES)]
    pub token_bytes: usize,

    /// Apply a permissive CORS policy
    #[arg(
        long,
        env = "VIDEOHUB_CORS_PERMISSIVE",
        default_value_t = true,
        action = clap::ArgAction::Set
    )]
    pub cors_permissive: bool,
}

impl Config {
    /// Load `.env`, then parse flags and environment
    pub fn load() -> Result<Self> {
        load_env(Path::new(env!("CARGO_MANIFEST_DIR")));
        let config = Self::parse();
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=MAX_TOKEN_BYTES).contains(&self.token_bytes),
            "token_bytes must be between 1 and {}, got {}",
            MAX_TOKEN_BYTES,
            self.token_bytes
        );
        Ok(())
    }

    pub fn token_generator(&self) -> TokenGenerator {
        TokenGenerator::new(self.token_bytes)
    }
}

/// Standard dotenv search (cwd + parents), then `<dir>/.env` if present
pub fn load_env(dir: &Path) {
    let _ = dotenv::dotenv();

    let candidate = dir.join(".env");
    if candidate.exists() {
        let _ = dotenv::from_path(&candidate);
    }
}
