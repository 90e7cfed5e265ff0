use std::env;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// PostgreSQL URL; todos are kept in memory when unset
    pub database_url: Option<String>,
    /// Accepted `AuthToken` values; every token is accepted when empty
    pub auth_tokens: Vec<String>,
    pub auth_timeout: Option<Duration>,
    pub store_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            database_url: env::var("DATABASE_URL").ok().filter(|url| !url.is_empty()),
            auth_tokens: env::var("AUTH_TOKENS")
                .map(|tokens| parse_token_list(&tokens))
                .unwrap_or_default(),
            auth_timeout: env::var("AUTH_TIMEOUT_MS").ok().and_then(|v| parse_millis(&v)),
            store_timeout: env::var("STORE_TIMEOUT_MS").ok().and_then(|v| parse_millis(&v)),
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_token_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// Zero disables the timeout
fn parse_millis(raw: &str) -> Option<Duration> {
    raw.trim()
        .parse::<u64>()
        .ok()
        .filter(|ms| *ms > 0)
        .map(Duration::from_millis)
}
