//! # email_score
//!
//! Email-address quality assessment library. Given an address, the engine
//! runs a set of independent checks and combines them into a weighted 0–100
//! deliverability score with a three-way verdict.
//!
//! ## Checks
//!
//! - **Syntax**: address shape against an email grammar
//! - **Domain**: structural re-validation of the domain/TLD portion
//! - **Disposable**: deny-list of throwaway providers
//! - **Role account**: `admin@`, `support@`, and friends
//! - **MX / catch-all / mailbox**: pluggable probes, deterministic by default
//!
//! ## Example
//!
//! ```rust
//! use email_score::{ScoringPipeline, ValidationConfig, Status};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let pipeline = ScoringPipeline::new(ValidationConfig::default())?;
//!
//!     let result = pipeline.validate("user@gmail.com").await;
//!     assert_ne!(result.status, Status::Invalid);
//!     println!("score = {}", result.score);
//!
//!     Ok(())
//! }
//! ```

pub mod disposable;
pub mod domain;
pub mod pipeline;
pub mod probes;
pub mod role;
pub mod score;
pub mod syntax;

#[cfg(feature = "resolver")]
pub mod resolver;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration for the scoring pipeline
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// MX answer assumed for domains not on the known-provider list
    pub assume_mx_for_unknown: bool,
    /// Catch-all answer assumed for domains not on the known-provider list
    pub assume_catch_all_for_unknown: bool,
    /// Mailbox answer assumed for addresses on unknown domains
    pub assume_mailbox_for_unknown: bool,
    /// DNS resolver timeout in milliseconds (resolver feature)
    pub dns_timeout_ms: u64,
    /// Maximum number of DNS lookup attempts (resolver feature)
    pub dns_attempts: usize,
}

impl Default for ValidationConfig {
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

/// The seven boolean signals produced by one validation run.
///
/// Built once per call and never mutated afterwards; scoring treats each
/// field as independent weighted evidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckSignals {
    pub syntax: bool,
    pub domain: bool,
    pub mx: bool,
    pub disposable: bool,
    pub role_based: bool,
    pub catch_all: bool,
    pub smtp: bool,
}

impl CheckSignals {
    /// All-false signals, used for the syntax short-circuit path.
    pub const NONE: CheckSignals = CheckSignals {
        syntax: false,
        domain: false,
        mx: false,
        disposable: false,
        role_based: false,
        catch_all: false,
        smtp: false,
    };
}

/// Three-way verdict derived from the score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Valid,
    Risky,
    Invalid,
}

/// Complete result of validating one address.
///
/// A pure value with no identity beyond the call: validating the same
/// address twice with deterministic probes yields identical results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    /// The address as it was given to the pipeline
    pub email: String,
    /// The seven check signals
    pub signals: CheckSignals,
    /// Normalized deliverability score, 0–100
    pub score: u8,
    /// Verdict derived from the score
    pub status: Status,
}

/// Errors that can occur while constructing the pipeline or its parts
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Empty static list: {0}")]
    EmptyList(&'static str),
    #[error("Probe failed: {0}")]
    ProbeFailed(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
    #[error("Internal error: {0}")]
    InternalError(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ValidationError>;

// Re-export main types
pub use pipeline::ScoringPipeline;
pub use probes::{FixedOutcomeProbes, KnownProviderProbes, MailProbes};
pub use score::{classify, score_signals, weights};
