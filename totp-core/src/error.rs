use thiserror::Error;

/// Errors produced by this library.
///
/// Code generation and verification are pure computations and cannot fail;
/// only secret decoding (at construction) and entropy collection (during
/// secret generation) have error paths.
#[derive(Debug, Error)]
pub enum TotpError {
    /// The secret text is not valid base32.
    #[error("secret is not valid base32")]
    InvalidSecret,

    /// The operating-system entropy source failed.
    #[error("entropy source failed: {0}")]
    Entropy(#[from] std::io::Error),
}
