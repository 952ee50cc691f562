//! Token parsing and the base64url codec.
//!
//! Wire form is `<signature>.<payload>` with both segments base64url
//! (`-`/`_` alphabet). Tokens are emitted without `=` padding; decoding
//! accepts padded and unpadded input alike.

use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use base64::Engine;

use crate::error::{VerifyError, VerifyResult};

/// Base64url engine: unpadded output, padding-indifferent input.
pub(crate) const BASE64URL: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new()
        .with_encode_padding(false)
        .with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// A parsed `<signature>.<payload>` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedRequest {
    signature: Vec<u8>,
    payload: Vec<u8>,
}

impl SignedRequest {
    /// Parse a token into decoded signature and payload bytes.
    ///
    /// Requires exactly one `.` separator splitting the token into two
    /// non-empty segments.
    pub fn parse(token: &str) -> VerifyResult<Self> {
        let mut segments = token.split('.');
        let (sig, payload) = match (segments.next(), segments.next(), segments.next()) {
            (Some(sig), Some(payload), None) if !sig.is_empty() && !payload.is_empty() => {
                (sig, payload)
            }
            _ => {
                return Err(VerifyError::Decode {
                    reason: "token must be <signature>.<payload> with two non-empty segments"
                        .to_string(),
                })
            }
        };

        Ok(Self {
            signature: decode_segment(sig, "signature")?,
            payload: decode_segment(payload, "payload")?,
        })
    }

    /// Decoded signature bytes (the claimed HMAC digest).
    pub fn signature(&self) -> &[u8] {
        &self.signature
    }

    /// Decoded payload bytes (the JSON document the signature covers).
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }
}

fn decode_segment(segment: &str, which: &str) -> VerifyResult<Vec<u8>> {
    BASE64URL.decode(segment).map_err(|e| VerifyError::Decode {
        reason: format!("invalid base64url {} segment: {}", which, e),
    })
}
