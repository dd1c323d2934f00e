//! Runtime configuration loaded from environment variables.
//!
//! | Variable             | Default                 | Description                                  |
//! |----------------------|-------------------------|----------------------------------------------|
//! | `ESSQL_URL`          | `http://localhost:9200` | Base URL of the search service               |
//! | `ESSQL_TIMEOUT_SECS` | `30`                    | Request timeout in seconds                   |
//! | `ESSQL_LOG_LEVEL`    | `warn`                  | tracing filter (trace/debug/info/warn/error) |

use std::time::Duration;

pub const DEFAULT_URL: &str = "http://localhost:9200";

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Base URL of the search service.
    pub url: String,

    /// Request timeout in seconds.
    pub timeout_secs: u64,

    /// Tracing filter string, e.g. `"essql=debug,warn"`.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.to_string(),
            timeout_secs: 30,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, applying defaults where
    /// a variable is absent or unparseable.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            url:          env_str(&lookup, "ESSQL_URL", &defaults.url),
            timeout_secs: env_parse(&lookup, "ESSQL_TIMEOUT_SECS", defaults.timeout_secs),
            log_level:    env_str(&lookup, "ESSQL_LOG_LEVEL", &defaults.log_level),
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn env_str(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> String {
    lookup(key).unwrap_or_else(|| default.to_string())
}

fn env_parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: T) -> T {
    lookup(key).and_then(|v| v.parse().ok()).unwrap_or(default)
}
