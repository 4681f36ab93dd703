//! Authentication and authorization ports.
//!
//! Quill has a single privileged principal: the moderator. Destructive
//! operations (delete, delete-all, edit) must pass a capability check at
//! the service boundary before any backend call is issued.

/// Role carried by tokens allowed to moderate the collection.
pub const ROLE_MODERATOR: &str = "moderator";

/// Claims stored in bearer tokens.
#[derive(Debug, Clone)]
pub struct TokenClaims {
    pub subject: String,
    pub roles: Vec<String>,
    pub exp: i64,
}

/// Token service trait for bearer-token operations.
pub trait TokenService: Send + Sync {
    /// Generate a token for a subject with the given roles.
    fn generate_token(&self, subject: &str, roles: Vec<String>) -> Result<String, AuthError>;

    /// Validate and decode a token.
    fn validate_token(&self, token: &str) -> Result<TokenClaims, AuthError>;

    /// Lifetime of issued tokens, in seconds.
    fn expiration_seconds(&self) -> i64;
}

/// Passphrase hashing service for the moderator credential.
pub trait PassphraseService: Send + Sync {
    /// Hash a plain text passphrase.
    fn hash(&self, passphrase: &str) -> Result<String, AuthError>;

    /// Verify a passphrase against a stored hash.
    fn verify(&self, passphrase: &str, hash: &str) -> Result<bool, AuthError>;
}

/// Authentication errors.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),

    #[error("Missing authorization header")]
    MissingAuth,

    #[error("Insufficient permissions")]
    InsufficientPermissions,

    #[error("Hashing error: {0}")]
    HashingError(String),
}
