//! Session Token Generator
//! Mission: Issue opaque, unguessable bearer tokens

use rand::rngs::OsRng;
use rand::RngCore;
use std::sync::Arc;
use tracing::debug;

/// Default number of random bytes per token (64 hex characters)
pub const DEFAULT_TOKEN_BYTES: usize = 32;

/// Source of cryptographically secure random bytes
pub trait EntropySource: Send + Sync {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error>;
}

/// Operating system CSPRNG
#[derive(Debug, Default, Clone, Copy)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn fill(&self, dest: &mut [u8]) -> Result<(), rand::Error> {
        OsRng.try_fill_bytes(dest)
    }
}

/// Token generation failure
#[derive(Debug)]
pub enum TokenError {
    Entropy(rand::Error),
    EmptyToken,
    Collision,
}

impl std::fmt::Display for TokenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TokenError::Entropy(e) => write!(f, "Entropy source failed: {}", e),
            TokenError::EmptyToken => write!(f, "Refusing to issue an empty token"),
            TokenError::Collision => write!(f, "Generated token is already in use"),
        }
    }
}

impl std::error::Error for TokenError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TokenError::Entropy(e) => Some(e),
            TokenError::EmptyToken | TokenError::Collision => None,
        }
    }
}

/// Hex-encoded random token generator
#[derive(Clone)]
pub struct TokenGenerator {
    length: usize,
    source: Arc<dyn EntropySource>,
}

impl TokenGenerator {
    /// Create a generator backed by the OS CSPRNG
    pub fn new(length: usize) -> Self {
        Self::with_source(length, Arc::new(OsEntropy))
    }

    pub fn with_source(length: usize, source: Arc<dyn EntropySource>) -> Self {
        Self { length, source }
    }

    /// Byte length of generated tokens before hex encoding
    pub fn length(&self) -> usize {
        self.length
    }

    /// Generate a fresh token of `2 * length` hex characters
    pub fn generate(&self) -> Result<String, TokenError> {
        if self.length == 0 {
            return Err(TokenError::EmptyToken);
        }

        let mut bytes = vec![0u8; self.length];
        self.source.fill(&mut bytes).map_err(TokenError::Entropy)?;

        debug!("Generated session token ({} bytes)", self.length);

        Ok(hex::encode(bytes))
    }
}

impl Default for TokenGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_BYTES)
    }
}

impl std::fmt::Debug for TokenGenerator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenGenerator")
            .field("length", &self.length)
            .finish_non_exhaustive()
    }
}

/// Entropy sources for exercising failure paths in tests
#[doc(hidden)]
pub mod testing {
    use super::EntropySource;

    /// Entropy source that always fails
    #[derive(Debug, Default, Clone, Copy)]
    pub struct FailingEntropy;

    impl EntropySource for FailingEntropy {
        fn fill(&self, _dest: &mut [u8]) -> Result<(), rand::Error> {
            Err(rand::Error::new(std::io::Error::new(
                std::io::ErrorKind::Other,
                "entropy unavailable",
            )))
        }
    }
}
