//! Base58-check encoding.
//!
//! The checksum is the first four bytes of double SHA-256 over the payload.
//! Addresses and WIF strings are both rendered through this module.

use crate::hash::hash256;
use crate::{Error, Result};

/// Encodes `data` with a four-byte double-SHA-256 checksum appended.
pub fn encode_check(data: &[u8]) -> String {
    let checksum = hash256(data);
    let mut payload = Vec::with_capacity(data.len() + 4);
    payload.extend_from_slice(data);
    payload.extend_from_slice(&checksum[..4]);
    bs58::encode(payload).into_string()
}

/// Decodes a base58-check string, validating and stripping the checksum.
pub fn decode_check(input: &str) -> Result<Vec<u8>> {
    let decoded = bs58::decode(input)
        .into_vec()
        .map_err(|e| Error::MalformedInput(format!("base58: {e}")))?;
    if decoded.len() < 4 {
        return Err(Error::MalformedInput(format!(
            "base58-check payload too short: {} byte(s)",
            decoded.len()
        )));
    }
    let (data, checksum) = decoded.split_at(decoded.len() - 4);
    if hash256(data)[..4] != *checksum {
        return Err(Error::ChecksumMismatch);
    }
    Ok(data.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn round_trip() {
        let data = [0x17, 0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_check(&data);
        assert_eq!(decode_check(&encoded).unwrap(), data);
    }

    #[test]
    fn corrupted_checksum_is_rejected() {
        let encoded = encode_check(&[0x17; 21]);
        // Swap the final character for a different alphabet member.
        let mut corrupted: Vec<char> = encoded.chars().collect();
        let last = *corrupted.last().unwrap();
        *corrupted.last_mut().unwrap() = if last == '1' { '2' } else { '1' };
        let corrupted: String = corrupted.into_iter().collect();
        assert_eq!(decode_check(&corrupted), Err(Error::ChecksumMismatch));
    }

    #[test]
    fn non_alphabet_input_is_malformed() {
        assert!(matches!(
            decode_check("not-base58-0OIl"),
            Err(Error::MalformedInput(_))
        ));
    }

    #[test]
    fn short_payload_is_malformed() {
        // "1" decodes to a single zero byte, shorter than a checksum.
        assert!(matches!(decode_check("1"), Err(Error::MalformedInput(_))));
    }

    proptest! {
        #[test]
        fn round_trip_arbitrary(data in proptest::collection::vec(any::<u8>(), 0..64)) {
            let encoded = encode_check(&data);
            prop_assert_eq!(decode_check(&encoded).unwrap(), data);
        }
    }
}
