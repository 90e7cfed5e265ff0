//! Authenticator backed by a fixed token list
//!
//! Only SHA-256 digests of the configured tokens are kept in memory.

use std::collections::HashSet;

use async_trait::async_trait;

use crate::auth::hash_token;
use crate::domain::ports::Authenticator;

pub struct StaticTokenAuthenticator {
    token_hashes: HashSet<String>,
}

impl StaticTokenAuthenticator {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let token_hashes = tokens
            .into_iter()
            .filter(|t| !t.as_ref().is_empty())
            .map(|t| hash_token(t.as_ref()))
            .collect();
        Self { token_hashes }
    }

    pub fn len(&self) -> usize {
        self.token_hashes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.token_hashes.is_empty()
    }
}

#[async_trait]
impl Authenticator for StaticTokenAuthenticator {
    async fn is_authenticated(&self, token: &str) -> bool {
        if token.is_empty() {
            return false;
        }
        let known = self.token_hashes.contains(&hash_token(token));
        if !known {
            tracing::debug!("Unknown auth token");
        }
        known
    }
}
