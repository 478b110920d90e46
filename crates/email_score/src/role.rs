//! Role-account detection against a static prefix list
//!
//! A local part counts as a role account only when it equals a prefix
//! exactly or continues it with `.` or `-`. Plain prefix containment is
//! deliberately not enough: `administrator` is not `admin`.

use anyhow::Result;
use tracing::{debug, info};

/// Detects role / functional mailboxes (`admin@`, `support@`, ...).
pub struct RoleDetector {
    prefixes: Vec<String>,
}

impl RoleDetector {
    /// Create a detector from an iterator of role prefixes.
    pub fn new<I>(prefixes: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let prefixes: Vec<String> = prefixes.into_iter().map(|p| p.to_lowercase()).collect();
        if prefixes.is_empty() {
            return Err(anyhow::anyhow!("No prefixes provided for role detection"));
        }

        info!("Role detector initialized with {} prefixes", prefixes.len());

        Ok(Self { prefixes })
    }

    /// Create a detector from newline-separated list content.
    pub fn from_list(content: &str) -> Result<Self> {
        Self::new(crate::disposable::parse_domain_list(content))
    }

    /// Detector loaded from the bundled prefix list.
    pub fn bundled() -> Result<Self> {
        Self::from_list(include_str!("../../../data/role_prefixes.txt"))
    }

    /// Check whether an address looks like a role account.
    ///
    /// Extracts the local part before the first `@` and lower-cases it.
    /// Matches in three modes, in order: exact equality, `prefix.`, then
    /// `prefix-`.
    pub fn is_role_account(&self, email: &str) -> bool {
        let local = crate::domain::local_part_of(email).to_lowercase();
        if local.is_empty() {
            return false;
        }

        for prefix in &self.prefixes {
            if local == *prefix
                || local.starts_with(&format!("{prefix}."))
                || local.starts_with(&format!("{prefix}-"))
            {
                debug!("local part '{}' matches role prefix '{}'", local, prefix);
                return true;
            }
        }
        false
    }

    /// Number of prefixes on the list
    pub fn prefix_count(&self) -> usize {
        self.prefixes.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector() -> RoleDetector {
        RoleDetector::bundled().unwrap()
    }

    #[test]
    fn exact_match() {
        let d = detector();
        assert!(d.is_role_account("admin@x.com"));
        assert!(d.is_role_account("support@example.com"));
        assert!(d.is_role_account("no-reply@example.com"));
    }

    #[test]
    fn no_substring_match() {
        let d = detector();
        assert!(!d.is_role_account("administrator@x.com"));
        assert!(!d.is_role_account("salesforce@example.com"));
        assert!(!d.is_role_account("information@example.com"));
    }

    #[test]
    fn separator_prefixed_match() {
        let d = detector();
        assert!(d.is_role_account("admin.team@x.com"));
        assert!(d.is_role_account("admin-bot@x.com"));
        assert!(d.is_role_account("support-emea@example.com"));
        assert!(d.is_role_account("billing.eu@example.com"));
    }

    #[test]
    fn case_insensitive() {
        let d = detector();
        assert!(d.is_role_account("Admin@x.com"));
        assert!(d.is_role_account("SUPPORT@x.com"));
        assert!(d.is_role_account("Admin.Team@x.com"));
    }

    #[test]
    fn non_role_accounts() {
        let d = detector();
        assert!(!d.is_role_account("alice@example.com"));
        assert!(!d.is_role_account("bob.smith@example.com"));
        assert!(!d.is_role_account(""));
    }

    #[test]
    fn custom_prefix_list() {
        let d = RoleDetector::new(["ops".to_string()]).unwrap();
        assert!(d.is_role_account("ops@x.com"));
        assert!(d.is_role_account("ops-oncall@x.com"));
        assert!(!d.is_role_account("opsteam@x.com"));
        assert!(!d.is_role_account("admin@x.com"));
    }

    #[test]
    fn rejects_empty_list() {
        assert!(RoleDetector::new(Vec::new()).is_err());
    }
}
