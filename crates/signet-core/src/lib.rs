//! HMAC-SHA256 signed request verification.
//!
//! A signed request is a compact `<signature>.<payload>` token: both
//! segments are base64url, the payload is a JSON object, and the signature
//! is an HMAC-SHA256 digest of the payload bytes under a shared secret.
//! This crate provides:
//!
//! - Token parsing with padding-tolerant base64url decoding
//! - Verification with a constant-time digest comparison
//! - Token issuance for testing and tooling
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use signet_core::{sign, verify};
//!
//! # fn example() -> anyhow::Result<()> {
//! let secret = b"s3cr3t";
//! let token = sign(&json!({"user_id": "42"}), secret)?;
//!
//! let payload = verify(&token, secret)?;
//! assert_eq!(payload.get("user_id"), Some(&json!("42")));
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Security
//!
//! The declared `algorithm` field is checked before any other claim is
//! trusted, and digests are compared in constant time. The secret is an
//! explicit parameter on every call; nothing is read from process-wide
//! state and nothing is persisted.

pub mod error;
pub mod payload;
pub mod sign;
pub mod token;
pub mod verify;

// Re-export main types
pub use error::{VerifyError, VerifyResult};
pub use payload::{Payload, ALGORITHM_HMAC_SHA256};
pub use sign::sign;
pub use token::SignedRequest;
pub use verify::verify;
