//! Argon2 passphrase hashing implementation.

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};

use quill_core::ports::{AuthError, PassphraseService};

/// Argon2-based passphrase service for the moderator credential.
pub struct Argon2PassphraseService {
    argon2: Argon2<'static>,
}

impl Argon2PassphraseService {
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

impl Default for Argon2PassphraseService {
    fn default() -> Self {
        Self::new()
    }
}

impl PassphraseService for Argon2PassphraseService {
    fn hash(&self, passphrase: &str) -> Result<String, AuthError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(passphrase.as_bytes(), &salt)
            .map(|h| h.to_string())
            .map_err(|e| AuthError::HashingError(e.to_string()))
    }

    fn verify(&self, passphrase: &str, hash: &str) -> Result<bool, AuthError> {
        let parsed_hash =
            PasswordHash::new(hash).map_err(|e| AuthError::HashingError(e.to_string()))?;

        Ok(self
            .argon2
            .verify_password(passphrase.as_bytes(), &parsed_hash)
            .is_ok())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hash_and_verify() {
        let service = Argon2PassphraseService::new();
        let passphrase = "moderator_passphrase_123";

        let hash = service.hash(passphrase).unwrap();
        assert!(service.verify(passphrase, &hash).unwrap());
        assert!(!service.verify("wrong_passphrase", &hash).unwrap());
    }

    #[test]
    fn malformed_hash_is_an_error() {
        let service = Argon2PassphraseService::new();

        let result = service.verify("anything", "not-a-phc-string");

        assert!(matches!(result, Err(AuthError::HashingError(_))));
    }
}
