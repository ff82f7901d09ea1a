//! Configuration module for environment variables and client settings

use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

use crate::error::{ClientError, Result};

/// Default API base URL when `RANKWISE_API_URL` is unset.
const DEFAULT_API_URL: &str = "https://api.rankwise.app/";

/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the RankWise API, always ending in a slash so endpoint
    /// paths join cleanly.
    pub api_url: Url,

    /// Per-request timeout for the HTTP client.
    pub timeout: Duration,

    /// Where the session tokens are persisted between invocations.
    pub token_file: PathBuf,
}

impl Config {
    /// Load configuration from environment variables, with defaults for
    /// everything so a bare environment still works against production.
    pub fn from_env() -> Result<Self> {
        let mut raw_url = env::var("RANKWISE_API_URL")
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());
        if !raw_url.ends_with('/') {
            raw_url.push('/');
        }
        let api_url = Url::parse(&raw_url)
            .map_err(|e| ClientError::Config(format!("RANKWISE_API_URL: {e}")))?;

        let timeout_secs = env::var("RANKWISE_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let token_file = env::var("RANKWISE_TOKEN_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_token_file());

        Ok(Self {
            api_url,
            timeout: Duration::from_secs(timeout_secs),
            token_file,
        })
    }
}

/// `$XDG_CONFIG_HOME/rankwise/session.json` (or the platform equivalent),
/// falling back to the current directory when no config dir exists.
fn default_token_file() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("rankwise")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_ends_with_slash() {
        // Endpoint joins rely on the trailing slash.
        assert!(DEFAULT_API_URL.ends_with('/'));
        let url = Url::parse(DEFAULT_API_URL).unwrap();
        assert_eq!(url.path(), "/");
    }
}
