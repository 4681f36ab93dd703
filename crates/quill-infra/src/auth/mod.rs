//! Authentication implementations.

mod jwt;
mod passphrase;

pub use jwt::{JwtConfig, JwtTokenService};
pub use passphrase::Argon2PassphraseService;
