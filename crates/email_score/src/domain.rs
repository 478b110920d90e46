//! Structural validation of the domain portion of an address
//!
//! Re-validates the substring after the first `@` independently of the
//! syntax checker. The two overlap on purpose: scoring treats "syntax" and
//! "domain" as separate weighted signals, and callers that only need
//! domain-level validity (e.g. before an MX probe) can use this without a
//! full local-part pass.

use crate::syntax::is_valid_label_sequence;

/// Check whether the domain portion of an address is structurally valid.
///
/// Fails fast when no `@` is present or the domain substring is empty.
/// Beyond the per-label hostname grammar, the top-level label must be at
/// least two characters and purely alphabetic.
pub fn is_valid_email_domain(email: &str) -> bool {
    let Some((_, domain)) = email.split_once('@') else {
        return false;
    };
    is_valid_domain(domain)
}

/// Validate a bare domain string (no local part).
pub fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() || !is_valid_label_sequence(domain) {
        return false;
    }

    // TLD rule: last label, length >= 2, alphabetic only.
    let tld = domain.rsplit('.').next().unwrap_or("");
    tld.len() >= 2 && tld.bytes().all(|b| b.is_ascii_alphabetic())
}

/// Extract the domain after the last `@`, if any.
///
/// Used by the detectors, which operate on substrings directly and never
/// re-run the full grammar.
pub fn domain_of(email: &str) -> Option<&str> {
    email.rfind('@').map(|at| &email[at + 1..])
}

/// Extract the local part before the first `@`.
///
/// Mirrors a `split('@')` head: an input without `@` yields the whole
/// string. Callers gate on the syntax signal before trusting this.
pub fn local_part_of(email: &str) -> &str {
    email.split('@').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn requires_at_sign_and_domain() {
        assert!(!is_valid_email_domain(""));
        assert!(!is_valid_email_domain("no-at-sign"));
        assert!(!is_valid_email_domain("user@"));
        assert!(is_valid_email_domain("user@example.com"));
    }

    #[test]
    fn splits_on_first_at() {
        // Everything after the first '@' is the domain candidate.
        assert!(!is_valid_email_domain("a@b@c.com"));
    }

    #[test]
    fn enforces_alphabetic_tld_of_two_or_more() {
        assert!(is_valid_domain("example.com"));
        assert!(is_valid_domain("example.co"));
        assert!(!is_valid_domain("example.c"));
        assert!(!is_valid_domain("example.c0m"));
        assert!(!is_valid_domain("example.123"));
        // Single-label domains are label-valid but fail the TLD rule
        // unless the label itself is alphabetic and long enough.
        assert!(is_valid_domain("localhost"));
        assert!(!is_valid_domain("x"));
    }

    #[test]
    fn rejects_malformed_labels() {
        assert!(!is_valid_domain("-example.com"));
        assert!(!is_valid_domain("example-.com"));
        assert!(!is_valid_domain("exa mple.com"));
        assert!(!is_valid_domain(".example.com"));
        assert!(!is_valid_domain("example..com"));
    }

    #[test]
    fn substring_extraction() {
        assert_eq!(domain_of("user@example.com"), Some("example.com"));
        assert_eq!(domain_of("a@b@c.com"), Some("c.com"));
        assert_eq!(domain_of("no-at-sign"), None);
        assert_eq!(domain_of("user@"), Some(""));

        assert_eq!(local_part_of("user@example.com"), "user");
        assert_eq!(local_part_of("a@b@c.com"), "a");
        assert_eq!(local_part_of("no-at-sign"), "no-at-sign");
        assert_eq!(local_part_of(""), "");
    }
}
