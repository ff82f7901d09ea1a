//! JWT Claims Decoding
//!
//! Decode-only access to the claims carried by the server's tokens. The
//! signature is deliberately NOT verified: the server is the authority on
//! token validity, and the client only needs the payload to display an
//! identity and to check expiry locally. Do not upgrade this to verified
//! decoding; tokens signed with keys unknown to the client must still decode.

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde::{Deserialize, Serialize};

use crate::error::{ClientError, Result};

/// Claims embedded in every token issued by the RankWise API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User email, used as the display identity.
    pub email: String,
    /// Token issued-at (Unix seconds).
    pub iat: i64,
    /// Token expiry (Unix seconds).
    pub exp: i64,
}

/// Decode the claims from a JWT without verifying its signature.
///
/// Malformed input of any shape is an error value, never a panic.
pub fn decode_claims(token: &str) -> Result<Claims> {
    let mut segments = token.split('.');
    let payload = match (segments.next(), segments.next(), segments.next()) {
        (Some(_header), Some(payload), Some(_signature)) => payload,
        _ => return Err(ClientError::Session("malformed token".to_string())),
    };
    if segments.next().is_some() {
        return Err(ClientError::Session("malformed token".to_string()));
    }

    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| ClientError::Session("malformed token payload".to_string()))?;

    serde_json::from_slice(&bytes)
        .map_err(|_| ClientError::Session("unrecognized token claims".to_string()))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_claims_without_knowing_the_key() {
        let token = test_tokens::signed_token("user@example.com", 3600);
        let claims = decode_claims(&token).unwrap();
        assert_eq!(claims.email, "user@example.com");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn malformed_tokens_are_errors_not_panics() {
        for bad in ["", "not-a-jwt", "a.b", "a.b.c.d", "x.!!!.y"] {
            assert!(decode_claims(bad).is_err(), "accepted {bad:?}");
        }
    }

    #[test]
    fn valid_base64_with_wrong_claims_is_an_error() {
        use base64::Engine as _;

        // Payload decodes as base64 but is not a claims object.
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(b"[1,2,3]");
        let token = format!("eyJh.{payload}.sig");
        assert!(decode_claims(&token).is_err());
    }
}
