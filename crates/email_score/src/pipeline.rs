//! Scoring pipeline orchestrating all per-address checks
//!
//! Sequences the checks for one address with the contractual short-circuit
//! and gating rules: syntax failure stops everything, MX and catch-all run
//! only for structurally valid domains, and the mailbox probe runs only
//! when MX resolved and the domain is not disposable.

use crate::{
    disposable::DisposableDetector,
    domain,
    role::RoleDetector,
    score::{classify, score_signals},
    syntax, CheckSignals, MailProbes, ValidationConfig, ValidationError, ValidationResult,
};

use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

/// Main scoring pipeline coordinating all per-address checks
pub struct ScoringPipeline {
    disposable_detector: DisposableDetector,
    role_detector: RoleDetector,
    probes: Arc<dyn MailProbes>,
}

impl ScoringPipeline {
    /// Create a pipeline with the bundled static lists and the default
    /// probes: DNS-backed MX lookups when the `resolver` feature is
    /// enabled, otherwise the deterministic reference probes.
    pub fn new(config: ValidationConfig) -> Result<Self, ValidationError> {
        #[cfg(feature = "resolver")]
        let probes = crate::resolver::ResolverProbes::new(
            config.dns_timeout_ms,
            config.dns_attempts,
            config.assume_catch_all_for_unknown,
            config.assume_mailbox_for_unknown,
        )
        .context("Failed to initialize resolver probes")?;

        #[cfg(not(feature = "resolver"))]
        let probes = crate::probes::KnownProviderProbes::bundled(
            config.assume_mx_for_unknown,
            config.assume_catch_all_for_unknown,
            config.assume_mailbox_for_unknown,
        )
        .context("Failed to initialize reference probes")?;

        Self::with_probes(Arc::new(probes))
    }

    /// Create a pipeline with custom probes (real resolver, test double).
    pub fn with_probes(probes: Arc<dyn MailProbes>) -> Result<Self, ValidationError> {
        info!("Initializing scoring pipeline");

        let disposable_detector =
            DisposableDetector::bundled().context("Failed to initialize disposable detector")?;
        let role_detector =
            RoleDetector::bundled().context("Failed to initialize role detector")?;

        info!(
            "Scoring pipeline initialized: {} disposable domains, {} role prefixes",
            disposable_detector.domain_count(),
            role_detector.prefix_count()
        );

        Ok(Self {
            disposable_detector,
            role_detector,
            probes,
        })
    }

    /// Validate one address and return its scored result.
    ///
    /// Never fails: malformed input yields all-false signals, score 0 and
    /// an `invalid` status, and a failing probe degrades to `false` for
    /// that signal only.
    #[instrument(skip(self), fields(email = %email))]
    pub async fn validate(&self, email: &str) -> ValidationResult {
        debug!("Starting validation");

        // Syntax gate: nothing else runs for malformed addresses. This is
        // a cost short-circuit, not an error.
        if !syntax::is_valid_email_syntax(email) {
            debug!("syntax check failed, short-circuiting");
            return self.build_result(email, CheckSignals::NONE);
        }

        let domain_valid = domain::is_valid_email_domain(email);
        let domain_str = domain::domain_of(email).unwrap_or("");

        // MX and catch-all have no data dependency on each other; both are
        // gated on domain validity.
        let (mx, catch_all) = if domain_valid {
            let (mx_result, catch_all_result) = tokio::join!(
                self.probes.has_mx(domain_str),
                self.probes.is_catch_all(domain_str)
            );
            (
                self.probe_outcome("mx", domain_str, mx_result),
                self.probe_outcome("catch_all", domain_str, catch_all_result),
            )
        } else {
            debug!("domain check failed, skipping MX and catch-all probes");
            (false, false)
        };

        // Detectors operate on substrings directly, independent of domain
        // validity.
        let disposable = self.disposable_detector.is_disposable(email);
        let role_based = self.role_detector.is_role_account(email);

        // Mailbox probe only makes sense when the domain accepts mail and
        // is not a throwaway provider.
        let smtp = if mx && !disposable {
            let outcome = self.probes.mailbox_exists(email).await;
            self.probe_outcome("smtp", email, outcome)
        } else {
            false
        };

        let signals = CheckSignals {
            syntax: true,
            domain: domain_valid,
            mx,
            disposable,
            role_based,
            catch_all,
            smtp,
        };

        self.build_result(email, signals)
    }

    fn build_result(&self, email: &str, signals: CheckSignals) -> ValidationResult {
        let score = score_signals(&signals);
        let status = classify(score);

        debug!("validation complete: score={}, status={:?}", score, status);

        ValidationResult {
            email: email.to_string(),
            signals,
            score,
            status,
        }
    }

    /// Degrade a probe failure to a `false` signal.
    fn probe_outcome(&self, probe: &str, subject: &str, outcome: anyhow::Result<bool>) -> bool {
        match outcome {
            Ok(value) => value,
            Err(e) => {
                warn!("{} probe failed for '{}': {}", probe, subject, e);
                false
            }
        }
    }

    /// Pipeline statistics for monitoring endpoints
    pub fn stats(&self) -> PipelineStats {
        PipelineStats {
            disposable_domains_count: self.disposable_detector.domain_count(),
            role_prefixes_count: self.role_detector.prefix_count(),
        }
    }
}

/// Statistics about the scoring pipeline
#[derive(Debug, Clone, serde::Serialize)]
pub struct PipelineStats {
    pub disposable_domains_count: usize,
    pub role_prefixes_count: usize,
}
