//! Authenticator that accepts every token
//!
//! Used when no tokens are configured, for local development.

use async_trait::async_trait;

use crate::domain::ports::Authenticator;

pub struct AllowAllAuthenticator;

#[async_trait]
impl Authenticator for AllowAllAuthenticator {
    async fn is_authenticated(&self, _token: &str) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn accepts_any_token() {
        assert!(AllowAllAuthenticator.is_authenticated("").await);
        assert!(AllowAllAuthenticator.is_authenticated("anything").await);
    }
}
