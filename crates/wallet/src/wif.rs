//! Wallet Import Format encoding of private keys.
//!
//! Layout: version byte, 32 key bytes, a trailing 0x01 marking compressed
//! public-key usage, all base58-check encoded. The decoded payload is 34
//! bytes (38 including the checksum).

use lyra_crypto::base58;
use zeroize::Zeroize;

use crate::key_pair::PrivateKey;
use crate::{Error, Result};

const COMPRESSED_FLAG: u8 = 0x01;
const PAYLOAD_LEN: usize = 34;

/// Exports a private key as a WIF string.
pub fn encode_wif(private_key: &PrivateKey, wif_version: u8) -> String {
    let mut payload = [0u8; PAYLOAD_LEN];
    payload[0] = wif_version;
    payload[1..33].copy_from_slice(private_key.as_bytes());
    payload[33] = COMPRESSED_FLAG;
    let encoded = base58::encode_check(&payload);
    payload.zeroize();
    encoded
}

/// Imports a private key from a WIF string.
pub fn decode_wif(wif: &str, wif_version: u8) -> Result<PrivateKey> {
    let mut payload = base58::decode_check(wif).map_err(|e| match e {
        lyra_crypto::Error::ChecksumMismatch => Error::InvalidWif("checksum mismatch".to_string()),
        other => Error::InvalidWif(other.to_string()),
    })?;

    let result = (|| {
        if payload.len() != PAYLOAD_LEN {
            return Err(Error::InvalidWif(format!(
                "decoded length {} (expected {PAYLOAD_LEN})",
                payload.len()
            )));
        }
        if payload[0] != wif_version {
            return Err(Error::InvalidWif(format!(
                "version byte 0x{:02x} (expected 0x{wif_version:02x})",
                payload[0]
            )));
        }
        if payload[33] != COMPRESSED_FLAG {
            return Err(Error::InvalidWif(
                "missing compressed-key flag".to_string(),
            ));
        }
        PrivateKey::from_bytes(&payload[1..33])
            .map_err(|_| Error::InvalidWif("key bytes are not a valid scalar".to_string()))
    })();
    payload.zeroize();
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const WIF_VERSION: u8 = 0x80;

    #[test]
    fn reference_vector() {
        let private_key = PrivateKey::from_hex(
            "9ba2eb3eedf9f0745f0d40b1eec838cb483ddca6a919608ae42411f1f57ceedd",
        )
        .unwrap();
        let wif = encode_wif(&private_key, WIF_VERSION);
        assert_eq!(wif, "L2SFKYhNdSkNzbgB9k1GzkDvL5ZznrnJ8uxaicYPXo8RjbwpPUFX");
        assert_eq!(
            decode_wif(&wif, WIF_VERSION).unwrap().as_bytes(),
            private_key.as_bytes()
        );
    }

    #[test]
    fn corrupted_character_is_rejected() {
        let wif = encode_wif(&PrivateKey::random(), WIF_VERSION);
        let mut corrupted: Vec<char> = wif.chars().collect();
        let target = corrupted.len() / 2;
        corrupted[target] = if corrupted[target] == '1' { '2' } else { '1' };
        let corrupted: String = corrupted.into_iter().collect();
        assert!(matches!(
            decode_wif(&corrupted, WIF_VERSION),
            Err(Error::InvalidWif(_))
        ));
    }

    #[test]
    fn wrong_network_version_is_rejected() {
        let wif = encode_wif(&PrivateKey::random(), WIF_VERSION);
        assert!(matches!(
            decode_wif(&wif, 0x81),
            Err(Error::InvalidWif(_))
        ));
    }

    #[test]
    fn plain_base58_check_payload_is_rejected() {
        // Valid checksum but not the WIF layout.
        let bogus = lyra_crypto::base58::encode_check(&[0x80; 10]);
        assert!(matches!(
            decode_wif(&bogus, WIF_VERSION),
            Err(Error::InvalidWif(_))
        ));
    }

    proptest! {
        #[test]
        fn round_trip(seed in proptest::array::uniform32(1u8..)) {
            // Almost all 32-byte strings are valid scalars; skip the rest.
            if let Ok(key) = PrivateKey::from_bytes(&seed) {
                let wif = encode_wif(&key, WIF_VERSION);
                let decoded = decode_wif(&wif, WIF_VERSION).unwrap();
                prop_assert_eq!(decoded.as_bytes(), key.as_bytes());
            }
        }
    }
}
