//! Argon2id password hashing.
//!
//! Hashing is deliberately slow, so the async entry points run on the
//! blocking thread pool.

use argon2::{
    Argon2,
    password_hash::{self, PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use rand::{RngCore, rngs::OsRng};
use thiserror::Error;
use tokio::task::{JoinError, spawn_blocking};

const SALT_BYTES: usize = 16;

/// Well-formed hash with the default Argon2id parameters that no password
/// matches. Verified against when an account is missing so both paths pay the
/// same hashing cost.
pub const UNMATCHABLE_HASH: &str = "$argon2id$v=19$m=19456,t=2,p=1$YmFja29mZmljZS1kdW1teQ$AAECAwQFBgcICQoLDA0ODxAREhMUFRYXGBkaGxwdHh8";

#[derive(Debug, Error)]
pub enum PasswordError {
    #[error("password hashing failed: {0}")]
    Hash(password_hash::Error),

    #[error("password hashing task failed")]
    Join(#[from] JoinError),
}

/// Hash `password` into a PHC string.
///
/// # Errors
///
/// Returns an error if hashing fails or the blocking task is cancelled.
pub async fn hash_password(password: String) -> Result<String, PasswordError> {
    spawn_blocking(move || hash_password_blocking(&password)).await?
}

/// Check `password` against a stored PHC string. A malformed stored hash
/// never matches.
///
/// # Errors
///
/// Returns an error if the blocking task is cancelled.
pub async fn verify_password(password: String, hash: String) -> Result<bool, PasswordError> {
    Ok(spawn_blocking(move || verify_password_blocking(&password, &hash)).await?)
}

pub(crate) fn hash_password_blocking(password: &str) -> Result<String, PasswordError> {
    let mut salt_bytes = [0_u8; SALT_BYTES];

    OsRng.fill_bytes(&mut salt_bytes);

    let salt = SaltString::encode_b64(&salt_bytes).map_err(PasswordError::Hash)?;

    Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(PasswordError::Hash)
}

pub(crate) fn verify_password_blocking(password: &str, hash: &str) -> bool {
    PasswordHash::new(hash).is_ok_and(|parsed| {
        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn hash_verifies_only_the_original_password() -> TestResult {
        let hash = hash_password_blocking("correct horse")?;

        assert!(hash.starts_with("$argon2id$"), "unexpected hash format: {hash}");
        assert!(verify_password_blocking("correct horse", &hash));
        assert!(!verify_password_blocking("battery staple", &hash));

        Ok(())
    }

    #[test]
    fn same_password_hashes_differently() -> TestResult {
        let first = hash_password_blocking("pw")?;
        let second = hash_password_blocking("pw")?;

        assert_ne!(first, second, "salts should differ");

        Ok(())
    }

    #[test]
    fn malformed_hash_never_matches() {
        assert!(!verify_password_blocking("pw", "not-a-phc-string"));
        assert!(!verify_password_blocking("pw", ""));
    }

    #[test]
    fn unmatchable_hash_uses_default_parameters() -> TestResult {
        let parsed = PasswordHash::new(UNMATCHABLE_HASH)?;
        let defaults = argon2::Params::default();

        assert_eq!(parsed.algorithm, argon2::Algorithm::Argon2id.ident());
        assert_eq!(
            argon2::Params::try_from(&parsed)?.m_cost(),
            defaults.m_cost(),
            "memory cost differs from a real hash"
        );
        assert!(!verify_password_blocking("", UNMATCHABLE_HASH));
        assert!(!verify_password_blocking("pw", UNMATCHABLE_HASH));

        Ok(())
    }

    #[tokio::test]
    async fn async_helpers_round_trip() -> TestResult {
        let hash = hash_password("pw".to_string()).await?;

        assert!(verify_password("pw".to_string(), hash).await?);

        Ok(())
    }
}
