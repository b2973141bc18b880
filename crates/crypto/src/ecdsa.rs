//! ECDSA over secp256r1.
//!
//! Signatures are the ledger's 64-byte r||s form. Signing hashes the message
//! with SHA-256 and uses the RFC 6979 deterministic nonce, so a given
//! (key, message) pair always produces the same bytes.

use p256::ecdsa::signature::{Signer, Verifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::SecretKey;
use rand::rngs::OsRng;

use crate::{Error, Result};

/// ECDSA operations over the ledger curve.
pub struct ECDsa;

impl ECDsa {
    /// Signs `data` with the given private key, returning the 64-byte r||s
    /// signature over the SHA-256 digest of `data`.
    pub fn sign(data: &[u8], private_key: &[u8; 32]) -> Result<[u8; 64]> {
        let secret_key = SecretKey::from_bytes(private_key.into())
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        let signing_key = SigningKey::from(secret_key);
        let signature: Signature = signing_key.sign(data);

        let mut result = [0u8; 64];
        result.copy_from_slice(&signature.to_bytes());
        Ok(result)
    }

    /// Verifies a 64-byte r||s signature over `data` against a SEC1-encoded
    /// public key. Returns `Ok(false)` for a well-formed but wrong signature.
    pub fn verify(data: &[u8], signature: &[u8], public_key: &[u8]) -> Result<bool> {
        if signature.len() != 64 {
            return Err(Error::InvalidSignature(format!(
                "expected 64 bytes, got {}",
                signature.len()
            )));
        }
        let signature = Signature::from_slice(signature)
            .map_err(|e| Error::InvalidSignature(e.to_string()))?;
        let verifying_key = VerifyingKey::from_sec1_bytes(public_key)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        Ok(verifying_key.verify(data, &signature).is_ok())
    }

    /// Derives the 33-byte compressed public key for a private key.
    pub fn derive_compressed_public_key(private_key: &[u8; 32]) -> Result<[u8; 33]> {
        let secret_key = SecretKey::from_bytes(private_key.into())
            .map_err(|e| Error::InvalidKey(e.to_string()))?;
        let encoded = secret_key.public_key().to_encoded_point(true);

        let mut result = [0u8; 33];
        result.copy_from_slice(encoded.as_bytes());
        Ok(result)
    }

    /// Checks that a byte string is a valid curve scalar.
    pub fn validate_private_key(private_key: &[u8; 32]) -> bool {
        SecretKey::from_bytes(private_key.into()).is_ok()
    }

    /// Generates a fresh random private key.
    pub fn generate_private_key() -> [u8; 32] {
        SecretKey::random(&mut OsRng).to_bytes().into()
    }
}

/// Decodes a SEC1 public-key encoding and re-encodes it in compressed form.
/// Fails if the bytes do not describe a point on the curve.
pub fn compress_point(sec1: &[u8]) -> Result<[u8; 33]> {
    let public_key = p256::PublicKey::from_sec1_bytes(sec1)
        .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
    let encoded = public_key.to_encoded_point(true);

    let mut result = [0u8; 33];
    result.copy_from_slice(encoded.as_bytes());
    Ok(result)
}
