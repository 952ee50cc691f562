//! Signed request verification.
//!
//! Recomputes HMAC-SHA256 over the decoded payload bytes and compares the
//! digest against the signature segment in constant time.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::error::{VerifyError, VerifyResult};
use crate::payload::{Payload, ALGORITHM_HMAC_SHA256};
use crate::token::SignedRequest;

type HmacSha256 = Hmac<Sha256>;

/// Verify a signed request token against a shared secret.
///
/// # Verification Steps
///
/// 1. Parse the `<signature>.<payload>` token and decode both segments
/// 2. Parse the payload bytes as a JSON object
/// 3. Check the declared algorithm is HMAC-SHA256 (case-insensitive)
/// 4. Recompute HMAC-SHA256 over the payload bytes with `secret` as key
/// 5. Compare digests in constant time
///
/// On success the decoded payload is returned unchanged. The function is
/// pure: no I/O, no shared state, safe to call concurrently.
pub fn verify(token: &str, secret: &[u8]) -> VerifyResult<Payload> {
    match verify_inner(token, secret) {
        Ok(payload) => Ok(payload),
        Err(e) => {
            tracing::debug!(error = %e, "signed request rejected");
            Err(e)
        }
    }
}

fn verify_inner(token: &str, secret: &[u8]) -> VerifyResult<Payload> {
    if secret.is_empty() {
        return Err(VerifyError::EmptySecret);
    }

    let request = SignedRequest::parse(token)?;
    let payload = Payload::from_slice(request.payload())?;

    // The algorithm gate runs before any other claim is trusted.
    match payload.algorithm() {
        Some(alg) if alg.eq_ignore_ascii_case(ALGORITHM_HMAC_SHA256) => {}
        declared => {
            return Err(VerifyError::UnsupportedAlgorithm {
                algorithm: declared.unwrap_or("<missing>").to_string(),
            })
        }
    }

    // The signature covers the decoded payload bytes, not the base64 text.
    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(request.payload());

    // verify_slice is constant-time; wrong-length signatures land here too.
    mac.verify_slice(request.signature())
        .map_err(|_| VerifyError::SignatureMismatch)?;

    Ok(payload)
}
