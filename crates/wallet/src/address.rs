//! Checksummed address encoding of script hashes.

use lyra_crypto::{base58, UInt160};

use crate::{Error, Result};

/// Encodes a script hash as a base58-check address.
pub fn script_hash_to_address(script_hash: &UInt160, address_version: u8) -> String {
    let mut payload = [0u8; 21];
    payload[0] = address_version;
    payload[1..].copy_from_slice(script_hash.as_bytes());
    base58::encode_check(&payload)
}

/// Decodes a base58-check address back into its script hash.
pub fn address_to_script_hash(address: &str, address_version: u8) -> Result<UInt160> {
    let payload = base58::decode_check(address)
        .map_err(|e| Error::InvalidAddress(e.to_string()))?;
    if payload.len() != 21 {
        return Err(Error::InvalidAddress(format!(
            "decoded length {} (expected 21)",
            payload.len()
        )));
    }
    if payload[0] != address_version {
        return Err(Error::InvalidAddress(format!(
            "version byte 0x{:02x} (expected 0x{address_version:02x})",
            payload[0]
        )));
    }
    Ok(UInt160::from_slice(&payload[1..])?)
}
