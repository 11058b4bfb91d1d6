// file: src/auth/credentials.rs
// description: API credential loading from the environment and basic auth encoding
// reference: https://docs.rs/base64

use crate::error::{FetchError, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;

pub const USERNAME_VAR: &str = "CULTS_USERNAME";
pub const API_KEY_VAR: &str = "CULTS_API_KEY";

#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    username: String,
    api_key: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Reads the credential pair from the process environment, loading `.env` first.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let fetch = |name: &str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or_else(|| FetchError::MissingCredential(name.to_string()))
        };

        let username = fetch(USERNAME_VAR)?;
        let api_key = fetch(API_KEY_VAR)?;

        Ok(Self { username, api_key })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn basic_auth_header(&self) -> String {
        let token = STANDARD.encode(format!("{}:{}", self.username, self.api_key));
        format!("Basic {}", token)
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("api_key", &"<redacted>")
            .finish()
    }
}
