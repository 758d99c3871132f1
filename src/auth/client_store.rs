//! Client Directory
//! Mission: Register client accounts, check credentials, and track session tokens

use crate::auth::models::{Client, ClientRef};
use crate::auth::token::{TokenError, TokenGenerator};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Client directory failures
#[derive(Debug)]
pub enum DirectoryError {
    UsernameTaken,
    InvalidCredentials,
    TokenGeneration(TokenError),
}

impl std::fmt::Display for DirectoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DirectoryError::UsernameTaken => write!(f, "Username already exists"),
            DirectoryError::InvalidCredentials => write!(f, "Invalid username or password"),
            DirectoryError::TokenGeneration(e) => write!(f, "Token generation failed: {}", e),
        }
    }
}

impl std::error::Error for DirectoryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DirectoryError::TokenGeneration(e) => Some(e),
            _ => None,
        }
    }
}

/// In-memory client registry guarded by a single lock
pub struct ClientDirectory {
    inner: RwLock<DirectoryInner>,
    tokens: TokenGenerator,
}

#[derive(Default)]
struct DirectoryInner {
    /// Registration order; never shrinks, so indices stay valid
    clients: Vec<Client>,
    by_username: HashMap<String, usize>,
    by_token: HashMap<String, usize>,
    next_id: u64,
}

impl ClientDirectory {
    pub fn new(tokens: TokenGenerator) -> Self {
        Self {
            inner: RwLock::new(DirectoryInner {
                next_id: 1,
                ..Default::default()
            }),
            tokens,
        }
    }

    /// Register a new client, returning its assigned id
    pub fn register(&self, username: &str, password: &str) -> Result<String, DirectoryError> {
        let mut inner = self.inner.write();

        if inner.by_username.contains_key(username) {
            debug!("Registration rejected, username taken: {}", username);
            return Err(DirectoryError::UsernameTaken);
        }

        let id = format!("client{}", inner.next_id);
        inner.next_id += 1;

        let index = inner.clients.len();
        inner.clients.push(Client {
            id: id.clone(),
            username: username.to_string(),
            password: password.to_string(),
            token: String::new(),
        });
        inner.by_username.insert(username.to_string(), index);

        info!("✅ Registered client: {} ({})", username, id);

        Ok(id)
    }

    /// Check credentials and issue a fresh session token.
    ///
    /// The previous token of the client, if any, stops resolving.
    pub fn login(&self, username: &str, password: &str) -> Result<String, DirectoryError> {
        let mut inner = self.inner.write();

        let index = match inner.by_username.get(username) {
            Some(&i) if inner.clients[i].password == password => i,
            _ => {
                warn!("❌ Failed login attempt: {}", username);
                return Err(DirectoryError::InvalidCredentials);
            }
        };

        let token = self
            .tokens
            .generate()
            .map_err(DirectoryError::TokenGeneration)?;

        if inner.by_token.contains_key(&token) {
            return Err(DirectoryError::TokenGeneration(TokenError::Collision));
        }

        let previous = std::mem::replace(&mut inner.clients[index].token, token.clone());
        if !previous.is_empty() {
            inner.by_token.remove(&previous);
        }
        inner.by_token.insert(token.clone(), index);

        info!("🔐 Login successful: {}", username);

        Ok(token)
    }

    /// Resolve a bearer token to the client currently holding it
    pub fn resolve_token(&self, token: &str) -> Option<ClientRef> {
        if token.is_empty() {
            return None;
        }

        let inner = self.inner.read();
        inner
            .by_token
            .get(token)
            .map(|&i| inner.clients[i].to_ref())
    }

    /// Look up a client by id
    pub fn get(&self, id: &str) -> Option<ClientRef> {
        self.inner
            .read()
            .clients
            .iter()
            .find(|c| c.id == id)
            .map(Client::to_ref)
    }

    pub fn len(&self) -> usize {
        self.inner.read().clients.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for ClientDirectory {
    fn default() -> Self {
        Self::new(TokenGenerator::default())
    }
}
