//! Application configuration loaded from environment variables.
//!
//! Everything is read once at startup into an immutable `Config` that is
//! passed explicitly into handlers via `AppState` - no ambient env lookups
//! inside request logic.

use std::env;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Public base URL of the deployed mini app (used in the manifest)
    pub public_url: String,
    /// Display name of the mini app
    pub app_name: String,

    /// Neynar API key. A missing key surfaces as a per-request
    /// configuration error (500); the manifest and health endpoints keep
    /// serving without it.
    pub neynar_api_key: Option<String>,
    /// Neynar API base URL (overridable for tests)
    pub neynar_base_url: String,

    // --- Manifest account association (signed domain proof) ---
    pub account_association_header: Option<String>,
    pub account_association_payload: Option<String>,
    pub account_association_signature: Option<String>,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 3000,
            public_url: "http://localhost:3000".to_string(),
            app_name: "Token Swap Mini App".to_string(),
            neynar_api_key: Some("test_api_key".to_string()),
            neynar_base_url: "https://api.neynar.com".to_string(),
            account_association_header: None,
            account_association_payload: None,
            account_association_signature: None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            port: env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,
            public_url: env::var("PUBLIC_URL")
                .unwrap_or_else(|_| "https://top-casts-mini-app.vercel.app".to_string()),
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Token Swap Mini App".to_string()),

            neynar_api_key: env::var("NEYNAR_API_KEY")
                .ok()
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty()),
            neynar_base_url: env::var("NEYNAR_BASE_URL")
                .unwrap_or_else(|_| "https://api.neynar.com".to_string()),

            account_association_header: env::var("ACCOUNT_ASSOCIATION_HEADER").ok(),
            account_association_payload: env::var("ACCOUNT_ASSOCIATION_PAYLOAD").ok(),
            account_association_signature: env::var("ACCOUNT_ASSOCIATION_SIGNATURE").ok(),
        })
    }

    /// URL the manifest advertises for mini-app webhook events.
    pub fn webhook_url(&self) -> String {
        format!("{}/api/webhook", self.public_url)
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    Invalid(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    // Single test so concurrent test threads never race on process env.
    #[test]
    fn test_config_from_env() {
        env::set_var("NEYNAR_API_KEY", "test_key");
        env::set_var("PUBLIC_URL", "https://example.test");

        let config = Config::from_env().expect("Config should load");

        assert_eq!(config.neynar_api_key.as_deref(), Some("test_key"));
        assert_eq!(config.public_url, "https://example.test");
        assert_eq!(config.port, 3000);
        assert_eq!(config.webhook_url(), "https://example.test/api/webhook");

        // A blank key counts as missing.
        env::set_var("NEYNAR_API_KEY", "   ");
        let config = Config::from_env().expect("Config should load");
        assert!(config.neynar_api_key.is_none());
        env::remove_var("NEYNAR_API_KEY");
    }
}
