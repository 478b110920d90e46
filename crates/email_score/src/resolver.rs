//! Resolver-backed MX probe (`resolver` feature)
//!
//! Implements the real-networking side of the probe seam for the one check
//! DNS can answer: whether a domain publishes MX records. Catch-all and
//! mailbox existence need SMTP conversations and stay deterministic
//! placeholders here.

use crate::probes::MailProbes;
use anyhow::Result;
use async_trait::async_trait;
use hickory_resolver::{
    config::{ResolverConfig, ResolverOpts},
    AsyncResolver, TokioAsyncResolver,
};
use std::time::Duration;
use tracing::{debug, info};

/// Probes that answer the MX question with live DNS lookups.
pub struct ResolverProbes {
    resolver: TokioAsyncResolver,
    catch_all_fallback: bool,
    mailbox_fallback: bool,
}

impl ResolverProbes {
    /// Create resolver probes with the given query timeout and retry count.
    ///
    /// `catch_all_fallback` and `mailbox_fallback` are the deterministic
    /// answers for the two checks DNS cannot decide.
    pub fn new(
        timeout_ms: u64,
        attempts: usize,
        catch_all_fallback: bool,
        mailbox_fallback: bool,
    ) -> Result<Self> {
        info!("Initializing DNS-backed MX probe with Cloudflare DNS");

        let config = ResolverConfig::cloudflare();

        let mut opts = ResolverOpts::default();
        opts.timeout = Duration::from_millis(timeout_ms);
        opts.attempts = attempts;
        opts.negative_min_ttl = Some(Duration::from_secs(30));

        let resolver = AsyncResolver::tokio(config, opts);

        info!(
            "DNS-backed MX probe initialized - timeout: {}ms, attempts: {}",
            timeout_ms, attempts
        );

        Ok(Self {
            resolver,
            catch_all_fallback,
            mailbox_fallback,
        })
    }

    /// Clear the resolver cache
    pub fn clear_cache(&self) {
        self.resolver.clear_cache();
    }
}

#[async_trait]
impl MailProbes for ResolverProbes {
    async fn has_mx(&self, domain: &str) -> Result<bool> {
        debug!("Checking MX records for domain: {}", domain);

        match self.resolver.mx_lookup(domain).await {
            Ok(response) => {
                let mx_count = response.iter().count();
                debug!("Domain {} has {} MX record(s)", domain, mx_count);
                Ok(mx_count > 0)
            }
            Err(e) => {
                // NXDOMAIN and friends mean "no MX", not a probe failure.
                debug!("MX lookup failed for {}: {}", domain, e);
                Ok(false)
            }
        }
    }

    async fn is_catch_all(&self, domain: &str) -> Result<bool> {
        debug!("catch-all probe not resolvable via DNS for {}, using fallback", domain);
        Ok(self.catch_all_fallback)
    }

    async fn mailbox_exists(&self, email: &str) -> Result<bool> {
        debug!("mailbox probe not resolvable via DNS for {}, using fallback", email);
        Ok(self.mailbox_fallback)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn resolver_probes_creation() {
        let probes = ResolverProbes::new(1000, 2, false, false);
        assert!(probes.is_ok());
    }

    #[tokio::test]
    async fn fallback_answers_are_deterministic() {
        let probes = ResolverProbes::new(1000, 2, false, true).unwrap();
        assert!(!probes.is_catch_all("example.com").await.unwrap());
        assert!(probes.mailbox_exists("a@example.com").await.unwrap());
    }

    // Live-DNS assertions are deliberately absent: the MX answer for any
    // real domain can change and the test environment may be offline.
}
