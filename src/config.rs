use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

/// Application-level constants
pub const APP_NAME: &str = "FirstAid+";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENCAGE_BASE_URL: &str = "https://api.opencagedata.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
/// The mock auth calls pause this long to feel like a network round trip.
pub const DEFAULT_AUTH_LATENCY_MS: u64 = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid value for {var}: {value}")]
    InvalidValue { var: &'static str, value: String },
}

/// Get the application data directory
/// ~/FirstAidPlus/ on all platforms
pub fn app_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("FirstAidPlus")
}

/// Local storage file (personal contacts, auth session)
pub fn storage_path() -> PathBuf {
    app_data_dir().join("local_storage.db")
}

/// Log filter used when RUST_LOG is not set
pub fn default_log_filter() -> &'static str {
    "info,firstaid_lib=debug"
}

/// Which response provider answers chat messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    /// Hosted generative-language API.
    Remote,
    /// Keyword rules, no network.
    Local,
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "remote" | "gemini" => Ok(Self::Remote),
            "local" | "rules" => Ok(Self::Local),
            _ => Err(ConfigError::InvalidValue {
                var: "FIRSTAID_PROVIDER",
                value: s.to_string(),
            }),
        }
    }
}

/// What the assistant says when the remote provider fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureReply {
    /// Fixed apology message.
    Apology,
    /// Answer from the local keyword rules instead.
    LocalRules,
}

impl FromStr for FailureReply {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apology" => Ok(Self::Apology),
            "rules" | "local" => Ok(Self::LocalRules),
            _ => Err(ConfigError::InvalidValue {
                var: "FIRSTAID_FAILURE_REPLY",
                value: s.to_string(),
            }),
        }
    }
}

/// Runtime configuration, normally read from `FIRSTAID_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardConfig {
    pub provider: ProviderKind,
    pub failure_reply: FailureReply,
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    pub opencage_api_key: Option<String>,
    pub opencage_base_url: String,
    pub request_timeout: Duration,
    pub auth_latency: Duration,
    pub storage_path: PathBuf,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            provider: ProviderKind::Remote,
            failure_reply: FailureReply::Apology,
            gemini_api_key: None,
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_base_url: DEFAULT_GEMINI_BASE_URL.to_string(),
            opencage_api_key: None,
            opencage_base_url: DEFAULT_OPENCAGE_BASE_URL.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
            auth_latency: Duration::from_millis(DEFAULT_AUTH_LATENCY_MS),
            storage_path: storage_path(),
        }
    }
}

impl DashboardConfig {
    /// Read configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let mut config = Self::default();

        if let Some(v) = get("FIRSTAID_PROVIDER") {
            config.provider = v.parse()?;
        }
        if let Some(v) = get("FIRSTAID_FAILURE_REPLY") {
            config.failure_reply = v.parse()?;
        }
        config.gemini_api_key = get("FIRSTAID_GEMINI_API_KEY");
        if let Some(v) = get("FIRSTAID_GEMINI_MODEL") {
            config.gemini_model = v;
        }
        if let Some(v) = get("FIRSTAID_GEMINI_BASE_URL") {
            config.gemini_base_url = v.trim_end_matches('/').to_string();
        }
        config.opencage_api_key = get("FIRSTAID_OPENCAGE_KEY");
        if let Some(v) = get("FIRSTAID_REQUEST_TIMEOUT_SECS") {
            config.request_timeout = Duration::from_secs(parse_u64("FIRSTAID_REQUEST_TIMEOUT_SECS", &v)?);
        }
        if let Some(v) = get("FIRSTAID_AUTH_LATENCY_MS") {
            config.auth_latency = Duration::from_millis(parse_u64("FIRSTAID_AUTH_LATENCY_MS", &v)?);
        }
        if let Some(v) = get("FIRSTAID_STORAGE_PATH") {
            config.storage_path = PathBuf::from(v);
        }

        Ok(config)
    }
}

fn parse_u64(var: &'static str, value: &str) -> Result<u64, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        var,
        value: value.to_string(),
    })
}
