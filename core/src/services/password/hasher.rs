//! Password hashing and verification over bcrypt.

use crate::errors::{DomainError, DomainResult};

/// One-way hasher for account secrets
///
/// Digests are salted, so hashing the same secret twice yields different
/// strings that both verify. Comparison happens in constant time inside
/// bcrypt.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a hasher with the default bcrypt cost
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit cost factor
    ///
    /// Lower costs are only appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a secret into a verifiable digest
    pub fn hash(&self, secret: &str) -> DomainResult<String> {
        bcrypt::hash(secret, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash secret: {}", e),
        })
    }

    /// Verify a secret against a stored digest
    ///
    /// Returns `false` for a mismatch or a malformed digest; never errors.
    pub fn verify(&self, secret: &str, digest: &str) -> bool {
        bcrypt::verify(secret, digest).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_hasher() -> PasswordHasher {
        // Minimum cost keeps the test suite fast
        PasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify_round_trip() {
        let hasher = test_hasher();
        let digest = hasher.hash("correct-horse").unwrap();

        assert_ne!(digest, "correct-horse");
        assert!(hasher.verify("correct-horse", &digest));
        assert!(!hasher.verify("wrong-horse", &digest));
    }

    #[test]
    fn test_digests_are_salted() {
        let hasher = test_hasher();
        let first = hasher.hash("correct-horse").unwrap();
        let second = hasher.hash("correct-horse").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("correct-horse", &first));
        assert!(hasher.verify("correct-horse", &second));
    }

    #[test]
    fn test_malformed_digest_is_false_not_error() {
        let hasher = test_hasher();

        assert!(!hasher.verify("secret", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("secret", ""));
    }
}
