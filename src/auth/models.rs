//! Authentication Models
//! Mission: Define client account and session data structures

use serde::{Deserialize, Serialize};

/// Registered client account
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    pub id: String,
    pub username: String,
    pub password: String, // plaintext, never serialized
    pub token: String,    // empty until first login
}

impl Client {
    pub fn to_ref(&self) -> ClientRef {
        ClientRef {
            id: self.id.clone(),
            username: self.username.clone(),
        }
    }
}

/// Authenticated client handed to protected handlers (sanitized)
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClientRef {
    pub id: String,
    pub username: String,
}

/// Register/login request body
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

/// Login response
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_ref_hides_secrets() {
        let client = Client {
            id: "client1".to_string(),
            username: "alice".to_string(),
            password: "hunter2".to_string(),
            token: "abcd".to_string(),
        };

        let json = serde_json::to_value(client.to_ref()).unwrap();
        assert_eq!(json, serde_json::json!({"id": "client1", "username": "alice"}));
    }

    #[test]
    fn test_credentials_missing_fields_default_to_empty() {
        let creds: Credentials = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(creds.username, "bob");
        assert_eq!(creds.password, "");
    }

    #[test]
    fn test_credentials_ignore_unknown_fields() {
        let creds: Credentials =
            serde_json::from_str(r#"{"username":"bob","password":"pw","id":"x"}"#).unwrap();
        assert_eq!(creds.password, "pw");
    }

    #[test]
    fn test_login_response_shape() {
        let json = serde_json::to_string(&LoginResponse {
            token: "deadbeef".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"token":"deadbeef"}"#);
    }
}
