//! Error types for signed request verification.

/// Verification errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum VerifyError {
    /// Malformed token shape, base64, or JSON.
    #[error("decode error: {reason}")]
    Decode { reason: String },

    /// Payload declares a signing algorithm this verifier does not support.
    #[error("unsupported algorithm: {algorithm}")]
    UnsupportedAlgorithm { algorithm: String },

    /// Recomputed digest does not match the provided signature.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The shared secret is empty.
    #[error("secret must not be empty")]
    EmptySecret,
}

impl VerifyError {
    /// Exit code for CLI.
    pub fn exit_code(&self) -> i32 {
        match self {
            // Malformed input
            Self::Decode { .. } => 1,

            // Caller configuration
            Self::EmptySecret => 2,

            // Security issues (higher priority)
            Self::UnsupportedAlgorithm { .. } => 3,
            Self::SignatureMismatch => 4,
        }
    }
}

/// Result type for verification operations.
pub type VerifyResult<T> = Result<T, VerifyError>;
