//! Configuration types and CLI options.
//!
//! This module defines enums and structs used for command-line argument parsing
//! and configuration.

use std::time::Duration;

use clap::{Parser, ValueEnum};

use crate::config::constants::{
    DEFAULT_BIND_ADDR, DEFAULT_PORT, PRIMARY_ENDPOINT, PRIMARY_USER_AGENT, PROVIDER_TIMEOUT,
    PROVIDER_TIMEOUT_SECS, SECONDARY_ENDPOINT,
};

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Connection settings for one geolocation provider.
///
/// Immutable once built; each adapter owns its own copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Base endpoint URL
    pub endpoint: String,
    /// Per-request timeout
    pub timeout: Duration,
    /// User-Agent header value, if the provider needs one
    pub user_agent: Option<String>,
}

impl ProviderConfig {
    /// Default settings for the primary (KeyCDN) provider.
    pub fn primary() -> Self {
        Self {
            endpoint: PRIMARY_ENDPOINT.to_string(),
            timeout: PROVIDER_TIMEOUT,
            user_agent: Some(PRIMARY_USER_AGENT.to_string()),
        }
    }

    /// Default settings for the secondary (ip-api.com) provider.
    pub fn secondary() -> Self {
        Self {
            endpoint: SECONDARY_ENDPOINT.to_string(),
            timeout: PROVIDER_TIMEOUT,
            user_agent: None,
        }
    }
}

/// Command-line options.
///
/// # Examples
///
/// ```bash
/// # Serve the UI on the default address
/// ip_scanner
///
/// # Custom port and a shorter provider timeout
/// ip_scanner --port 9000 --timeout-seconds 2
/// ```
#[derive(Debug, Parser)]
#[command(
    name = "ip_scanner",
    about = "Browser-based IPv4 geolocation scanner with provider failover."
)]
pub struct Opt {
    /// Address the web UI binds to
    #[arg(long, default_value = DEFAULT_BIND_ADDR)]
    pub bind: String,

    /// Port the web UI listens on
    #[arg(long, default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Log level: error|warn|info|debug|trace
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    pub log_level: LogLevel,

    /// Log format: plain|json
    #[arg(long, value_enum, default_value_t = LogFormat::Plain)]
    pub log_format: LogFormat,

    /// Per-provider request timeout in seconds (at least 1)
    #[arg(
        long,
        default_value_t = PROVIDER_TIMEOUT_SECS,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub timeout_seconds: u64,

    /// Primary provider endpoint
    #[arg(long, default_value = PRIMARY_ENDPOINT)]
    pub primary_url: String,

    /// User-Agent sent to the primary provider (must look like `keycdn-tools:<url>`)
    #[arg(long, default_value = PRIMARY_USER_AGENT)]
    pub primary_user_agent: String,

    /// Secondary provider endpoint (the IP is appended as a path segment)
    #[arg(long, default_value = SECONDARY_ENDPOINT)]
    pub secondary_url: String,
}

/// Library configuration (no CLI dependencies).
///
/// ```
/// use ip_scanner::Config;
///
/// let config = Config {
///     port: 9000,
///     ..Default::default()
/// };
/// assert_eq!(config.primary.endpoint, "https://tools.keycdn.com/geo.json");
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Address the web UI binds to
    pub bind: String,
    /// Port the web UI listens on
    pub port: u16,
    /// Log level
    pub log_level: LogLevel,
    /// Log format
    pub log_format: LogFormat,
    /// Primary provider settings
    pub primary: ProviderConfig,
    /// Secondary provider settings
    pub secondary: ProviderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND_ADDR.to_string(),
            port: DEFAULT_PORT,
            log_level: LogLevel::Info,
            log_format: LogFormat::Plain,
            primary: ProviderConfig::primary(),
            secondary: ProviderConfig::secondary(),
        }
    }
}

impl From<Opt> for Config {
    fn from(opt: Opt) -> Self {
        let timeout = Duration::from_secs(opt.timeout_seconds);
        Self {
            bind: opt.bind,
            port: opt.port,
            log_level: opt.log_level,
            log_format: opt.log_format,
            primary: ProviderConfig {
                endpoint: opt.primary_url,
                timeout,
                user_agent: Some(opt.primary_user_agent),
            },
            secondary: ProviderConfig {
                endpoint: opt.secondary_url,
                timeout,
                user_agent: None,
            },
        }
    }
}
