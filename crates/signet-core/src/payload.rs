//! The decoded payload mapping.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{VerifyError, VerifyResult};

/// The signing algorithm this verifier supports.
pub const ALGORITHM_HMAC_SHA256: &str = "HMAC-SHA256";

/// The JSON mapping carried by a signed request.
///
/// Serializes transparently as the underlying object, so a verified
/// payload can be passed on to downstream consumers unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payload {
    claims: Map<String, Value>,
}

impl Payload {
    /// Parse payload bytes as a JSON object.
    pub(crate) fn from_slice(bytes: &[u8]) -> VerifyResult<Self> {
        let value: Value = serde_json::from_slice(bytes).map_err(|e| VerifyError::Decode {
            reason: format!("invalid JSON payload: {}", e),
        })?;

        match value {
            Value::Object(claims) => Ok(Self { claims }),
            other => Err(VerifyError::Decode {
                reason: format!("payload must be a JSON object, got {}", json_type_name(&other)),
            }),
        }
    }

    /// The declared signing algorithm, if present as a string.
    pub fn algorithm(&self) -> Option<&str> {
        self.claims.get("algorithm").and_then(Value::as_str)
    }

    /// Look up a single claim.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.claims.get(key)
    }

    /// All claims.
    pub fn claims(&self) -> &Map<String, Value> {
        &self.claims
    }

    /// Consume the payload, yielding the claims map.
    pub fn into_claims(self) -> Map<String, Value> {
        self.claims
    }
}

impl From<Payload> for Value {
    fn from(payload: Payload) -> Self {
        Value::Object(payload.claims)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
