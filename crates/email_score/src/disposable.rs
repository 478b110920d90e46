//! Disposable provider detection against a static deny-list
//!
//! Membership must be exact, so the Bloom filter acts only as a cheap
//! negative pre-filter in front of the authoritative set. Lists are
//! injected at construction time; the bundled list ships in
//! `data/disposable_domains.txt`.

use anyhow::Result;
use fastbloom::BloomFilter;
use std::collections::HashSet;
use tracing::{debug, info};

/// False positive rate for the Bloom pre-filter
const BLOOM_FP_RATE: f64 = 0.0001;

/// Detects addresses on known disposable / throwaway providers.
pub struct DisposableDetector {
    bloom_filter: BloomFilter,
    domains: HashSet<String>,
}

impl DisposableDetector {
    /// Create a detector from an iterator of deny-listed domains.
    ///
    /// Domains are lower-cased on load; lookups are case-insensitive.
    pub fn new<I>(domains: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let domains: HashSet<String> = domains.into_iter().map(|d| d.to_lowercase()).collect();
        if domains.is_empty() {
            return Err(anyhow::anyhow!("No domains provided for disposable detection"));
        }

        let bloom_filter = BloomFilter::with_false_pos(BLOOM_FP_RATE).items(domains.iter());

        info!("Disposable detector initialized with {} domains", domains.len());

        Ok(Self { bloom_filter, domains })
    }

    /// Create a detector from newline-separated list content.
    ///
    /// Blank lines and `#` comments are skipped.
    pub fn from_list(content: &str) -> Result<Self> {
        Self::new(parse_domain_list(content))
    }

    /// Detector loaded from the bundled deny-list.
    pub fn bundled() -> Result<Self> {
        Self::from_list(include_str!("../../../data/disposable_domains.txt"))
    }

    /// Check whether an address belongs to a disposable provider.
    ///
    /// Extracts the domain after the last `@`, lower-cases it and tests
    /// deny-list membership. Returns `false` when no domain is extractable.
    pub fn is_disposable(&self, email: &str) -> bool {
        let Some(domain) = crate::domain::domain_of(email) else {
            return false;
        };
        let normalized = domain.to_lowercase();

        if !self.bloom_filter.contains(&normalized) {
            return false;
        }
        let hit = self.domains.contains(&normalized);
        if hit {
            debug!("domain '{}' is on the disposable deny-list", normalized);
        }
        hit
    }

    /// Number of domains on the deny-list
    pub fn domain_count(&self) -> usize {
        self.domains.len()
    }
}

/// Parse a newline-separated domain list, skipping blanks and comments.
pub(crate) fn parse_domain_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn detector() -> DisposableDetector {
        DisposableDetector::new(
            ["mailinator.com", "tempmail.org"].map(String::from),
        )
        .unwrap()
    }

    #[test]
    fn rejects_empty_list() {
        assert!(DisposableDetector::new(Vec::new()).is_err());
    }

    #[test]
    fn detects_listed_domains() {
        let d = detector();
        assert!(d.is_disposable("user@mailinator.com"));
        assert!(d.is_disposable("user@tempmail.org"));
        assert!(!d.is_disposable("user@gmail.com"));
        assert!(!d.is_disposable("user@example.com"));
    }

    #[test]
    fn case_insensitive_membership() {
        let d = DisposableDetector::new(["TempMail.Org".to_string()]).unwrap();
        assert!(d.is_disposable("user@tempmail.org"));
        assert!(d.is_disposable("user@TEMPMAIL.ORG"));
    }

    #[test]
    fn no_domain_means_not_disposable() {
        let d = detector();
        assert!(!d.is_disposable("no-at-sign"));
        assert!(!d.is_disposable(""));
        assert!(!d.is_disposable("user@"));
    }

    #[test]
    fn uses_last_at_for_extraction() {
        let d = detector();
        assert!(d.is_disposable("a@b@mailinator.com"));
    }

    #[test]
    fn parses_list_content() {
        let content = "\n# comment\nmailinator.com\n\n  tempmail.org  \n";
        let parsed = parse_domain_list(content);
        assert_eq!(parsed, vec!["mailinator.com".to_string(), "tempmail.org".to_string()]);
    }

    #[test]
    fn bundled_list_loads() {
        let d = DisposableDetector::bundled().unwrap();
        assert!(d.domain_count() >= 20);
        assert!(d.is_disposable("user@mailinator.com"));
        assert!(!d.is_disposable("user@gmail.com"));
    }
}
