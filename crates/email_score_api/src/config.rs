//! Configuration management for the scoring API
//!
//! Layered loading via figment: struct defaults, then an optional
//! `Config.toml`, then `EMAIL_SCORE_`-prefixed environment variables.

use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub scoring: ScoringConfig,
    pub observability: ObservabilityConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
    /// Maximum number of addresses accepted in one batch request
    pub max_batch_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            request_timeout_secs: 30,
            max_batch_size: 500,
        }
    }
}

/// Scoring pipeline configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoringConfig {
    /// MX answer assumed for domains not on the known-provider list
    pub assume_mx_for_unknown: bool,
    /// Catch-all answer assumed for unknown domains
    pub assume_catch_all_for_unknown: bool,
    /// Mailbox answer assumed for addresses on unknown domains
    pub assume_mailbox_for_unknown: bool,
    /// DNS resolver timeout in milliseconds (resolver feature)
    pub dns_timeout_ms: u64,
    /// Maximum number of DNS lookup attempts (resolver feature)
    pub dns_attempts: usize,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            assume_mx_for_unknown: false,
            assume_catch_all_for_unknown: false,
            assume_mailbox_for_unknown: false,
            dns_timeout_ms: 500,
            dns_attempts: 2,
        }
    }
}

/// Observability configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// Enable JSON structured logging
    pub json_logs: bool,
    /// Log level filter
    pub log_level: String,
    /// Service name used in logs and metrics
    pub service_name: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            json_logs: false,
            log_level: "info".to_string(),
            service_name: "email-score-api".to_string(),
        }
    }
}
