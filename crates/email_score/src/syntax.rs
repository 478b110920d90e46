//! Syntax validation of full email addresses
//!
//! Implements an RFC-5322-style grammar without network access: a dot-atom
//! local part followed by `@` and a sequence of hostname labels. Pure and
//! deterministic; malformed input simply returns `false`.

use tracing::trace;

/// Maximum length of a single domain label per RFC 1035
pub(crate) const MAX_LABEL_LEN: usize = 63;

/// Check whether an address is syntactically valid.
///
/// The local part must be one or more characters from
/// `[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]`; the domain must be one or more
/// dot-separated labels, each 1–63 characters, alphanumeric with internal
/// hyphens only. Zero or multiple `@` characters fail the grammar: the
/// split happens at the first `@`, and `@` is not a valid domain character.
pub fn is_valid_email_syntax(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        trace!("no '@' in input");
        return false;
    };

    if local.is_empty() || !local.bytes().all(is_local_byte) {
        return false;
    }

    is_valid_label_sequence(domain)
}

/// Bytes allowed in the unquoted local part
fn is_local_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'!' | b'#' | b'$' | b'%' | b'&' | b'\'' | b'*' | b'+' | b'/' | b'=' | b'?' | b'^' | b'_' | b'`' | b'{' | b'|' | b'}' | b'~' | b'-')
}

/// Validate a dot-separated sequence of hostname labels.
///
/// Shared with the domain structural checker, which applies the same
/// per-label rule plus an additional TLD constraint.
pub(crate) fn is_valid_label_sequence(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }
    domain.split('.').all(is_valid_label)
}

fn is_valid_label(label: &str) -> bool {
    if label.is_empty() || label.len() > MAX_LABEL_LEN {
        return false;
    }
    if label.starts_with('-') || label.ends_with('-') {
        return false;
    }
    label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_common_addresses() {
        assert!(is_valid_email_syntax("user@example.com"));
        assert!(is_valid_email_syntax("first.last@sub.example.co.uk"));
        assert!(is_valid_email_syntax("user+tag@example.com"));
        assert!(is_valid_email_syntax("o'brien@example.ie"));
        assert!(is_valid_email_syntax("a@b"));
    }

    #[test]
    fn rejects_missing_or_repeated_at() {
        assert!(!is_valid_email_syntax(""));
        assert!(!is_valid_email_syntax("no-at-sign"));
        assert!(!is_valid_email_syntax("@@double.com"));
        assert!(!is_valid_email_syntax("a@b@c.com"));
        assert!(!is_valid_email_syntax("@example.com"));
        assert!(!is_valid_email_syntax("user@"));
    }

    #[test]
    fn rejects_bad_local_parts() {
        assert!(!is_valid_email_syntax("us er@example.com"));
        assert!(!is_valid_email_syntax("usér@example.com"));
        assert!(!is_valid_email_syntax("us\"er@example.com"));
    }

    #[test]
    fn rejects_bad_domain_labels() {
        assert!(!is_valid_email_syntax("user@-example.com"));
        assert!(!is_valid_email_syntax("user@example-.com"));
        assert!(!is_valid_email_syntax("user@exa mple.com"));
        assert!(!is_valid_email_syntax("user@example..com"));
        assert!(!is_valid_email_syntax("user@.example.com"));
        assert!(!is_valid_email_syntax("user@example.com."));
    }

    #[test]
    fn enforces_label_length() {
        let ok_label = "a".repeat(63);
        let long_label = "a".repeat(64);
        assert!(is_valid_email_syntax(&format!("u@{ok_label}.com")));
        assert!(!is_valid_email_syntax(&format!("u@{long_label}.com")));
    }

    #[test]
    fn allows_internal_hyphens() {
        assert!(is_valid_email_syntax("user@my-domain.com"));
        assert!(is_valid_email_syntax("user@a-b-c.example"));
    }
}
