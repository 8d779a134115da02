//! Credential verification.
//!
//! The shipped verifier is a placeholder that accepts a single hard-coded
//! account. It carries no security value; deployments must inject a real
//! `CredentialVerifier`.

use std::collections::BTreeSet;

use super::aggregates::Role;
use super::permissions;

/// The account a successful verification resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerifiedAdmin {
    /// Account identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email.
    pub email: String,
    /// Account role.
    pub role: Role,
    /// Granted permission identifiers.
    pub permissions: BTreeSet<String>,
}

/// Checks an email/password pair.
pub trait CredentialVerifier: Send + Sync {
    /// Returns the matching account, or `None` if the pair is rejected.
    fn verify(&self, email: &str, password: &str) -> Option<VerifiedAdmin>;
}

/// Demo account email accepted by [`MockCredentialVerifier`].
pub const DEMO_EMAIL: &str = "admin@furnistore.com";
/// Demo account password accepted by [`MockCredentialVerifier`].
pub const DEMO_PASSWORD: &str = "admin123";

/// Accepts exactly [`DEMO_EMAIL`] / [`DEMO_PASSWORD`] and resolves it to a
/// super admin holding every permission.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockCredentialVerifier;

impl CredentialVerifier for MockCredentialVerifier {
    fn verify(&self, email: &str, password: &str) -> Option<VerifiedAdmin> {
        if email != DEMO_EMAIL || password != DEMO_PASSWORD {
            return None;
        }
        Some(VerifiedAdmin {
            id: "admin-1".to_owned(),
            name: "Admin User".to_owned(),
            email: DEMO_EMAIL.to_owned(),
            role: Role::SuperAdmin,
            permissions: permissions::ALL.iter().map(|p| (*p).to_owned()).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_pair_resolves_to_super_admin() {
        let admin = MockCredentialVerifier
            .verify(DEMO_EMAIL, DEMO_PASSWORD)
            .unwrap();

        assert_eq!(admin.role, Role::SuperAdmin);
        assert!(admin.permissions.contains(permissions::MANAGE_PRODUCTS));
        assert_eq!(admin.permissions.len(), permissions::ALL.len());
    }

    #[test]
    fn test_any_other_pair_is_rejected() {
        let verifier = MockCredentialVerifier;

        assert!(verifier.verify(DEMO_EMAIL, "admin1234").is_none());
        assert!(verifier.verify("ADMIN@furnistore.com", DEMO_PASSWORD).is_none());
        assert!(verifier.verify("", "").is_none());
    }
}
