//! Private and public key containers.

use std::fmt;

use lyra_crypto::ECDsa;
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::{Error, Result};

/// A 32-byte curve scalar. The buffer is zeroed when the value is dropped,
/// and neither `Debug` nor `Display` ever reveal it.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct PrivateKey([u8; 32]);

impl PrivateKey {
    /// Wraps raw key bytes, rejecting scalars outside the curve order.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!("private key must be 32 bytes, got {}", bytes.len()))
        })?;
        if !ECDsa::validate_private_key(&array) {
            return Err(Error::MalformedInput(
                "private key is not a valid curve scalar".to_string(),
            ));
        }
        Ok(Self(array))
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes =
            hex::decode(input).map_err(|e| Error::MalformedInput(format!("hex: {e}")))?;
        let mut bytes = bytes;
        let result = Self::from_bytes(&bytes);
        bytes.zeroize();
        result
    }

    /// Generates a fresh random key.
    pub fn random() -> Self {
        Self(ECDsa::generate_private_key())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PrivateKey(..)")
    }
}

/// A validated 33-byte compressed curve point.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct PublicKey([u8; 33]);

impl PublicKey {
    /// Validates and wraps a compressed SEC1 encoding. The prefix byte must
    /// be 0x02 or 0x03 and the x-coordinate must decode to a curve point
    /// whose y-parity matches the prefix.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let array: [u8; 33] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!("public key must be 33 bytes, got {}", bytes.len()))
        })?;
        if array[0] != 0x02 && array[0] != 0x03 {
            return Err(Error::MalformedInput(format!(
                "invalid public key prefix 0x{:02x}",
                array[0]
            )));
        }
        // Reconstruct the point and re-encode; any x off the curve or parity
        // mismatch surfaces here.
        let roundtripped = lyra_crypto::ecdsa::compress_point(&array)
            .map_err(|e| Error::InvalidPublicKey(e.to_string()))?;
        if roundtripped != array {
            return Err(Error::InvalidPublicKey(
                "point parity does not match prefix".to_string(),
            ));
        }
        Ok(Self(array))
    }

    pub fn from_hex(input: &str) -> Result<Self> {
        let bytes =
            hex::decode(input).map_err(|e| Error::MalformedInput(format!("hex: {e}")))?;
        Self::from_bytes(&bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 33] {
        &self.0
    }
}

impl fmt::Display for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl fmt::Debug for PublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PublicKey({self})")
    }
}

/// A private key together with its derived public key.
#[derive(Clone)]
pub struct KeyPair {
    private_key: PrivateKey,
    public_key: PublicKey,
}

impl KeyPair {
    pub fn new(private_key: PrivateKey) -> Result<Self> {
        let compressed = ECDsa::derive_compressed_public_key(private_key.as_bytes())?;
        // Derivation output is compressed SEC1 by construction.
        let public_key = PublicKey(compressed);
        Ok(Self {
            private_key,
            public_key,
        })
    }

    pub fn private_key(&self) -> &PrivateKey {
        &self.private_key
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }
}

impl fmt::Debug for KeyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPair({})", self.public_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn derives_reference_public_key() {
        let private_key = PrivateKey::from_hex(
            "9ba2eb3eedf9f0745f0d40b1eec838cb483ddca6a919608ae42411f1f57ceedd",
        )
        .unwrap();
        let pair = KeyPair::new(private_key).unwrap();
        assert_eq!(
            pair.public_key().to_string(),
            "034f3d2e20ad0d396535518bde127280de73b9aa3bf42efa3f88ed5d577f3de116"
        );
    }

    #[test]
    fn rejects_bad_prefix() {
        let mut bytes =
            hex!("034f3d2e20ad0d396535518bde127280de73b9aa3bf42efa3f88ed5d577f3de116");
        bytes[0] = 0x04;
        assert!(matches!(
            PublicKey::from_bytes(&bytes),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn rejects_x_off_the_curve() {
        // x-coordinate chosen so x^3 - 3x + b is a quadratic non-residue.
        let bytes =
            hex!("029ba2eb3eedf9f0745f0d40b1eec838cb483ddca6a919608ae42411f1f57ceede");
        assert!(matches!(
            PublicKey::from_bytes(&bytes),
            Err(Error::InvalidPublicKey(_))
        ));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(PrivateKey::from_bytes(&[0x01; 31]).is_err());
        assert!(PublicKey::from_bytes(&[0x02; 32]).is_err());
    }

    #[test]
    fn debug_never_prints_key_material() {
        let key = PrivateKey::random();
        assert_eq!(format!("{key:?}"), "PrivateKey(..)");
    }
}
