use std::fmt::{Debug, Formatter};
use std::time::Duration;

use crate::http_client::DEFAULT_TIMEOUT;

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";
pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";

/// Alpha Vantage's published demo key. Public, rate limited, and only serves
/// a handful of symbols.
pub const DEMO_API_KEY: &str = "demo";

/// API key that never shows up in `Debug` output or logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey {
    value: String,
    demo: bool,
}

impl ApiKey {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let demo = value == DEMO_API_KEY;
        Self { value, demo }
    }

    pub fn demo() -> Self {
        Self::new(DEMO_API_KEY)
    }

    /// Use `configured` when present and non-blank, otherwise the demo key.
    pub fn or_demo(configured: Option<String>) -> Self {
        match configured {
            Some(value) if !value.trim().is_empty() => Self::new(value.trim()),
            _ => {
                tracing::warn!(
                    "{API_KEY_ENV} is not set; falling back to the public demo key, \
                     which only serves a few symbols"
                );
                Self::demo()
            }
        }
    }

    pub fn expose(&self) -> &str {
        &self.value
    }

    pub const fn is_demo(&self) -> bool {
        self.demo
    }
}

impl Debug for ApiKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.demo {
            f.write_str("ApiKey(demo)")
        } else {
            f.write_str("ApiKey(<redacted>)")
        }
    }
}

/// Connection settings handed to the fetcher at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchConfig {
    pub base_url: String,
    pub api_key: ApiKey,
    pub timeout: Duration,
}

impl FetchConfig {
    pub fn new(api_key: ApiKey) -> Self {
        Self {
            base_url: String::from(DEFAULT_BASE_URL),
            api_key,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self::new(ApiKey::demo())
    }
}
