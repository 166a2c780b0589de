//! Application configuration structs
//!
//! Loads configuration from environment variables (and a `.env` file when present).

use std::env;
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;
use std::time::Duration;

use chrono_tz::Tz;
use sentiment_core::SummaryWindow;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub api: ServerConfig,
    pub database: DatabaseConfig,
    pub worker: WorkerConfig,
    pub classifier: ClassifierConfig,
    pub summary: SummaryConfig,
}

/// General application settings
#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

/// Environment type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Self::Production),
            "staging" => Ok(Self::Staging),
            "development" => Ok(Self::Development),
            other => Err(format!("unknown environment '{other}'")),
        }
    }
}

/// HTTP server configuration
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Handler time budget; slower requests are answered with 503
    pub request_timeout: Duration,
    /// Browser origins allowed to read the API; empty disables CORS, `*` allows any
    pub cors_origins: Vec<String>,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Database configuration
///
/// `url` wins when set; otherwise the connection is assembled from the
/// individual `DB_*` settings.
#[derive(Clone)]
pub struct DatabaseConfig {
    pub url: Option<String>,
    pub host: String,
    pub port: u16,
    pub name: String,
    pub user: String,
    pub password: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub ensure_schema: bool,
}

impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("url", &self.url.as_ref().map(|_| "***"))
            .field("host", &self.host)
            .field("port", &self.port)
            .field("name", &self.name)
            .field("user", &self.user)
            .field("password", &"***")
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .field("ensure_schema", &self.ensure_schema)
            .finish()
    }
}

/// What the annotation worker does after a failed pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// End the worker and hand the error to whoever spawned it
    #[default]
    Stop,
    /// Log the error and poll again after the usual interval
    Continue,
}

impl FromStr for FailurePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "stop" => Ok(Self::Stop),
            "continue" => Ok(Self::Continue),
            other => Err(format!("unknown failure policy '{other}'")),
        }
    }
}

/// Annotation worker configuration
#[derive(Debug, Clone)]
pub struct WorkerConfig {
    pub enabled: bool,
    pub poll_interval: Duration,
    pub failure_policy: FailurePolicy,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            poll_interval: Duration::from_secs(default_poll_interval_secs()),
            failure_policy: FailurePolicy::default(),
        }
    }
}

/// Remote classifier configuration
#[derive(Clone)]
pub struct ClassifierConfig {
    pub url: String,
    pub api_token: Option<String>,
    pub timeout: Duration,
    pub max_input_chars: usize,
}

impl fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("url", &self.url)
            .field("api_token", &self.api_token.as_ref().map(|_| "***"))
            .field("timeout", &self.timeout)
            .field("max_input_chars", &self.max_input_chars)
            .finish()
    }
}

/// Summary (aggregation) configuration
#[derive(Debug, Clone)]
pub struct SummaryConfig {
    pub display_timezone: Tz,
    pub daily_window_days: u32,
    pub hourly_window_hours: u32,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            display_timezone: default_display_timezone(),
            daily_window_days: default_daily_window_days(),
            hourly_window_hours: default_hourly_window_hours(),
        }
    }
}

// Default value functions
fn default_app_name() -> String {
    "sentiment-service".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_api_port() -> u16 {
    5000
}

fn default_request_timeout_secs() -> u64 {
    30
}

fn default_db_host() -> String {
    "localhost".to_string()
}

fn default_db_port() -> u16 {
    5432
}

fn default_db_value() -> String {
    "postgres".to_string()
}

fn default_max_connections() -> u32 {
    10
}

fn default_min_connections() -> u32 {
    1
}

fn default_poll_interval_secs() -> u64 {
    120
}

fn default_classifier_url() -> String {
    "http://localhost:8080/classify".to_string()
}

fn default_classifier_timeout_secs() -> u64 {
    30
}

fn default_max_input_chars() -> usize {
    512
}

fn default_display_timezone() -> Tz {
    chrono_tz::America::Sao_Paulo
}

fn default_daily_window_days() -> u32 {
    SummaryWindow::DEFAULT_DAYS
}

fn default_hourly_window_hours() -> u32 {
    SummaryWindow::DEFAULT_HOURS
}

/// Read a typed variable, falling back to `default` when unset or blank
fn parse_var<T, F>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).filter(|v| !v.trim().is_empty()) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|e: T::Err| ConfigError::InvalidValue(key, e.to_string())),
        None => Ok(default),
    }
}

/// Like `parse_var`, rejecting values outside `range`
fn parse_in_range<T, F>(
    lookup: &F,
    key: &'static str,
    default: T,
    range: RangeInclusive<T>,
) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + fmt::Display,
    T::Err: fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    let value = parse_var(lookup, key, default)?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(ConfigError::InvalidValue(
            key,
            format!("{value} is outside {}..={}", range.start(), range.end()),
        ))
    }
}

fn parse_bool<F>(lookup: &F, key: &'static str, default: bool) -> Result<bool, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key).map(|v| v.trim().to_lowercase()) {
        None => Ok(default),
        Some(v) if v.is_empty() => Ok(default),
        Some(v) => match v.as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(ConfigError::InvalidValue(key, v)),
        },
    }
}

/// Comma-separated list; blank entries are dropped
fn list_var<F>(lookup: &F, key: &str) -> Vec<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.split(',')
                .map(str::trim)
                .filter(|v| !v.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn string_var<F>(lookup: &F, key: &str, default: impl FnOnce() -> String) -> String
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(default)
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    /// Returns an error if a variable holds a value that cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let display_timezone = match lookup("DISPLAY_TIMEZONE").filter(|v| !v.trim().is_empty()) {
            Some(name) => name
                .trim()
                .parse::<Tz>()
                .map_err(|_| ConfigError::InvalidValue("DISPLAY_TIMEZONE", name.clone()))?,
            None => default_display_timezone(),
        };

        Ok(Self {
            app: AppSettings {
                name: string_var(&lookup, "APP_NAME", default_app_name),
                env: parse_var(&lookup, "APP_ENV", Environment::default())?,
            },
            api: ServerConfig {
                host: string_var(&lookup, "API_HOST", default_host),
                port: parse_var(&lookup, "API_PORT", default_api_port())?,
                request_timeout: Duration::from_secs(parse_in_range(
                    &lookup,
                    "API_REQUEST_TIMEOUT_SECS",
                    default_request_timeout_secs(),
                    1..=u64::MAX,
                )?),
                cors_origins: list_var(&lookup, "API_CORS_ORIGINS"),
            },
            database: DatabaseConfig {
                url: lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()),
                host: string_var(&lookup, "DB_HOST", default_db_host),
                port: parse_var(&lookup, "DB_PORT", default_db_port())?,
                name: string_var(&lookup, "DB_NAME", default_db_value),
                user: string_var(&lookup, "DB_USER", default_db_value),
                password: string_var(&lookup, "DB_PASSWORD", default_db_value),
                max_connections: parse_var(
                    &lookup,
                    "DATABASE_MAX_CONNECTIONS",
                    default_max_connections(),
                )?,
                min_connections: parse_var(
                    &lookup,
                    "DATABASE_MIN_CONNECTIONS",
                    default_min_connections(),
                )?,
                ensure_schema: parse_bool(&lookup, "DATABASE_ENSURE_SCHEMA", false)?,
            },
            worker: WorkerConfig {
                enabled: parse_bool(&lookup, "ANNOTATION_ENABLED", true)?,
                poll_interval: Duration::from_secs(parse_in_range(
                    &lookup,
                    "ANNOTATION_POLL_INTERVAL_SECS",
                    default_poll_interval_secs(),
                    1..=u64::MAX,
                )?),
                failure_policy: parse_var(
                    &lookup,
                    "ANNOTATION_FAILURE_POLICY",
                    FailurePolicy::default(),
                )?,
            },
            classifier: ClassifierConfig {
                url: string_var(&lookup, "CLASSIFIER_URL", default_classifier_url),
                api_token: lookup("CLASSIFIER_API_TOKEN").filter(|v| !v.trim().is_empty()),
                timeout: Duration::from_secs(parse_var(
                    &lookup,
                    "CLASSIFIER_TIMEOUT_SECS",
                    default_classifier_timeout_secs(),
                )?),
                max_input_chars: parse_var(
                    &lookup,
                    "CLASSIFIER_MAX_INPUT_CHARS",
                    default_max_input_chars(),
                )?,
            },
            summary: SummaryConfig {
                display_timezone,
                daily_window_days: parse_in_range(
                    &lookup,
                    "SUMMARY_DAILY_WINDOW_DAYS",
                    default_daily_window_days(),
                    1..=SummaryWindow::MAX_DAYS,
                )?,
                hourly_window_hours: parse_in_range(
                    &lookup,
                    "SUMMARY_HOURLY_WINDOW_HOURS",
                    default_hourly_window_hours(),
                    1..=SummaryWindow::MAX_HOURS,
                )?,
            },
        })
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(&'static str, String),
}
