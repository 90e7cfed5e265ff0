//! Authenticator adapters

pub mod allow_all;
pub mod static_tokens;

pub use allow_all::AllowAllAuthenticator;
pub use static_tokens::StaticTokenAuthenticator;
