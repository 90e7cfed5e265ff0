//! Authentication port

use async_trait::async_trait;

/// Decides whether an opaque request token is authenticated.
///
/// There is no error channel: an implementation that cannot reach its
/// backend answers `false`.
#[async_trait]
pub trait Authenticator: Send + Sync {
    async fn is_authenticated(&self, token: &str) -> bool;
}
