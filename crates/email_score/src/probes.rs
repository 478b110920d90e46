//! Pluggable mail-exchange, catch-all and mailbox probes
//!
//! The three external-effect checks live behind one capability trait so a
//! real implementation (actual MX lookup, catch-all heuristics, SMTP
//! RCPT-TO) can be substituted without touching the scoring engine. The
//! reference implementations here are fully deterministic: a well-known
//! provider allow-list answers `true`, everything else falls back to
//! configured defaults.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashSet;
use tracing::{debug, info};

/// Capability interface for the external-effect checks.
///
/// Probe failures are reported as `Err`; the pipeline degrades them to a
/// `false` signal rather than aborting the validation.
#[async_trait]
pub trait MailProbes: Send + Sync {
    /// Does the domain appear to accept mail (MX present)?
    async fn has_mx(&self, domain: &str) -> Result<bool>;

    /// Does the domain appear to accept any local part?
    async fn is_catch_all(&self, domain: &str) -> Result<bool>;

    /// Does this specific mailbox appear to exist?
    async fn mailbox_exists(&self, email: &str) -> Result<bool>;
}

/// Deterministic reference probes backed by a provider allow-list.
///
/// Domains on the list are assumed to run real mail infrastructure: MX
/// resolves, no catch-all, mailboxes exist. Unknown domains get the
/// configured fallback answers (all `false` by default). This is a
/// placeholder for real networking, not a behavioral guarantee.
pub struct KnownProviderProbes {
    providers: HashSet<String>,
    mx_for_unknown: bool,
    catch_all_for_unknown: bool,
    mailbox_for_unknown: bool,
}

impl KnownProviderProbes {
    /// Create probes from an iterator of well-known provider domains.
    pub fn new<I>(providers: I, mx_for_unknown: bool, catch_all_for_unknown: bool, mailbox_for_unknown: bool) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let providers: HashSet<String> =
            providers.into_iter().map(|d| d.to_lowercase()).collect();
        if providers.is_empty() {
            return Err(anyhow::anyhow!("No providers given for reference probes"));
        }

        info!("Reference probes initialized with {} known providers", providers.len());

        Ok(Self {
            providers,
            mx_for_unknown,
            catch_all_for_unknown,
            mailbox_for_unknown,
        })
    }

    /// Probes loaded from the bundled provider list, with the given
    /// fallback answers for unknown domains.
    pub fn bundled(mx_for_unknown: bool, catch_all_for_unknown: bool, mailbox_for_unknown: bool) -> Result<Self> {
        let content = include_str!("../../../data/known_providers.txt");
        Self::new(
            crate::disposable::parse_domain_list(content),
            mx_for_unknown,
            catch_all_for_unknown,
            mailbox_for_unknown,
        )
    }

    fn is_known(&self, domain: &str) -> bool {
        self.providers.contains(&domain.to_lowercase())
    }

    /// Number of providers on the allow-list
    pub fn provider_count(&self) -> usize {
        self.providers.len()
    }
}

#[async_trait]
impl MailProbes for KnownProviderProbes {
    async fn has_mx(&self, domain: &str) -> Result<bool> {
        if self.is_known(domain) {
            debug!("domain '{}' is a known provider, assuming MX", domain);
            return Ok(true);
        }
        Ok(self.mx_for_unknown)
    }

    async fn is_catch_all(&self, domain: &str) -> Result<bool> {
        if self.is_known(domain) {
            // Major providers validate recipients, they are not catch-all.
            return Ok(false);
        }
        Ok(self.catch_all_for_unknown)
    }

    async fn mailbox_exists(&self, email: &str) -> Result<bool> {
        let domain = crate::domain::domain_of(email).unwrap_or("");
        if self.is_known(domain) {
            debug!("domain of '{}' is a known provider, assuming mailbox", email);
            return Ok(true);
        }
        Ok(self.mailbox_for_unknown)
    }
}

/// Test double with fixed answers for all three probes.
#[derive(Debug, Clone, Copy)]
pub struct FixedOutcomeProbes {
    pub mx: bool,
    pub catch_all: bool,
    pub mailbox: bool,
}

impl FixedOutcomeProbes {
    pub fn new(mx: bool, catch_all: bool, mailbox: bool) -> Self {
        Self { mx, catch_all, mailbox }
    }
}

#[async_trait]
impl MailProbes for FixedOutcomeProbes {
    async fn has_mx(&self, _domain: &str) -> Result<bool> {
        Ok(self.mx)
    }

    async fn is_catch_all(&self, _domain: &str) -> Result<bool> {
        Ok(self.catch_all)
    }

    async fn mailbox_exists(&self, _email: &str) -> Result<bool> {
        Ok(self.mailbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn known_provider_answers() {
        let probes = KnownProviderProbes::bundled(false, false, false).unwrap();

        assert!(probes.has_mx("gmail.com").await.unwrap());
        assert!(probes.has_mx("GMAIL.COM").await.unwrap());
        assert!(!probes.is_catch_all("gmail.com").await.unwrap());
        assert!(probes.mailbox_exists("user@gmail.com").await.unwrap());
    }

    #[tokio::test]
    async fn unknown_domain_falls_back() {
        let probes = KnownProviderProbes::bundled(false, false, false).unwrap();
        assert!(!probes.has_mx("unknown-corp.example").await.unwrap());
        assert!(!probes.is_catch_all("unknown-corp.example").await.unwrap());
        assert!(!probes.mailbox_exists("u@unknown-corp.example").await.unwrap());

        let optimistic = KnownProviderProbes::bundled(true, true, true).unwrap();
        assert!(optimistic.has_mx("unknown-corp.example").await.unwrap());
        assert!(optimistic.is_catch_all("unknown-corp.example").await.unwrap());
        assert!(optimistic.mailbox_exists("u@unknown-corp.example").await.unwrap());
    }

    #[tokio::test]
    async fn fixed_outcome_double() {
        let probes = FixedOutcomeProbes::new(true, false, true);
        assert!(probes.has_mx("anything.example").await.unwrap());
        assert!(!probes.is_catch_all("anything.example").await.unwrap());
        assert!(probes.mailbox_exists("a@anything.example").await.unwrap());
    }

    #[tokio::test]
    async fn rejects_empty_provider_list() {
        assert!(KnownProviderProbes::new(Vec::new(), false, false, false).is_err());
    }
}
