//! # Webhook Signature Verification
//!
//! Razorpay signs webhook deliveries with HMAC-SHA256 over the raw body,
//! hex encoded into the `x-razorpay-signature` header. Verification must
//! run over the unparsed body bytes.

use case_core::{StorefrontError, StorefrontResult};
use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the hex HMAC-SHA256 signature Razorpay expects for a body.
pub fn sign(payload: &[u8], secret: &str) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC can take key of any size");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a webhook signature against the shared secret.
pub fn verify(payload: &[u8], signature: &str, secret: &str) -> StorefrontResult<()> {
    if secret.is_empty() {
        return Err(StorefrontError::MisconfiguredSecret);
    }

    let expected = sign(payload, secret);
    if !constant_time_compare(signature, &expected) {
        return Err(StorefrontError::SignatureMismatch);
    }

    Ok(())
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sign_known_vector() {
        // RFC 4231 test case 2
        let sig = sign(b"what do ya want for nothing?", "Jefe");
        assert_eq!(
            sig,
            "5bdcc146bf60754e6a042426089575c75a003f089d2739839dec58b964ec3843"
        );
    }

    #[test]
    fn test_verify_roundtrip() {
        let body = br#"{"event":"payment.captured"}"#;
        let sig = sign(body, "secret123");

        assert!(verify(body, &sig, "secret123").is_ok());
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let body = br#"{"event":"payment.captured"}"#;
        let sig = sign(body, "secret123");

        let err = verify(body, &sig, "other-secret").unwrap_err();
        assert!(matches!(err, StorefrontError::SignatureMismatch));
    }

    #[test]
    fn test_verify_rejects_tampered_body() {
        let sig = sign(b"original body", "secret123");

        let err = verify(b"tampered body", &sig, "secret123").unwrap_err();
        assert!(matches!(err, StorefrontError::SignatureMismatch));
    }

    #[test]
    fn test_verify_empty_secret() {
        let err = verify(b"body", "sig", "").unwrap_err();
        assert!(matches!(err, StorefrontError::MisconfiguredSecret));
    }

    #[test]
    fn test_constant_time_compare() {
        assert!(constant_time_compare("abc123", "abc123"));
        assert!(!constant_time_compare("abc123", "abc124"));
        assert!(!constant_time_compare("abc", "abcd"));
    }
}
