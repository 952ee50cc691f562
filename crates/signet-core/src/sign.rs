//! Signed request issuance.
//!
//! Counterpart to [`verify`](crate::verify::verify); used by the CLI and
//! by tests to mint tokens that the verifier accepts.

use anyhow::{bail, Context, Result};
use base64::Engine;
use hmac::{Hmac, Mac};
use serde_json::Value;
use sha2::Sha256;

use crate::payload::ALGORITHM_HMAC_SHA256;
use crate::token::BASE64URL;

type HmacSha256 = Hmac<Sha256>;

/// Sign a JSON object, producing a `<signature>.<payload>` token.
///
/// The `algorithm` field is stamped with `"HMAC-SHA256"`, replacing any
/// declared value, so the emitted token always names the algorithm it was
/// signed with.
pub fn sign(payload: &Value, secret: &[u8]) -> Result<String> {
    if secret.is_empty() {
        bail!("secret must not be empty");
    }
    let Some(object) = payload.as_object() else {
        bail!("payload must be a JSON object");
    };

    let mut claims = object.clone();
    claims.insert(
        "algorithm".to_string(),
        Value::String(ALGORITHM_HMAC_SHA256.to_string()),
    );

    let payload_bytes = serde_json::to_vec(&claims).context("failed to serialize payload")?;

    let mut mac =
        HmacSha256::new_from_slice(secret).expect("HMAC-SHA256 accepts keys of any length");
    mac.update(&payload_bytes);
    let digest = mac.finalize().into_bytes();

    Ok(format!(
        "{}.{}",
        BASE64URL.encode(digest),
        BASE64URL.encode(&payload_bytes)
    ))
}
