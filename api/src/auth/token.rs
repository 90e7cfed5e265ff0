//! Auth token extraction and hashing

use axum::http::HeaderMap;
use sha2::{Digest, Sha256};

/// Header carrying the caller's token (`AuthToken`)
pub const AUTH_TOKEN_HEADER: &str = "authtoken";

/// Extract the token from the `AuthToken` header
///
/// A missing header yields the empty token; the authenticator decides what
/// that means. When the header repeats, the first value wins.
pub fn extract_auth_token(headers: &HeaderMap) -> String {
    headers
        .get(AUTH_TOKEN_HEADER)
        .map(|v| String::from_utf8_lossy(v.as_bytes()).into_owned())
        .unwrap_or_default()
}

/// Hash a token for comparison without keeping the plaintext around
pub fn hash_token(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    hex::encode(hasher.finalize())
}
