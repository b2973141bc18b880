//! Fixed-width hash types used as ledger identifiers.
//!
//! Both types store wire order (little-endian). Display and parsing use the
//! reversed big-endian hex convention; the wire encoding is never reversed.

use std::fmt;
use std::str::FromStr;

use lyra_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::hash::{hash160, hash256};
use crate::Error;

/// A 160-bit identifier: the hash of a verification or contract script.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt160([u8; 20]);

/// A 256-bit identifier: a transaction or asset id.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct UInt256([u8; 32]);

impl UInt160 {
    pub const SIZE: usize = 20;

    pub const fn new(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    /// The script hash of `script`: RIPEMD-160 over SHA-256.
    pub fn from_script(script: &[u8]) -> Self {
        Self(hash160(script))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; 20] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!("expected 20 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn to_array(self) -> [u8; 20] {
        self.0
    }
}

impl UInt256 {
    pub const SIZE: usize = 32;

    pub const fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Double SHA-256 of `data`, in wire order.
    pub fn from_data(data: &[u8]) -> Self {
        Self(hash256(data))
    }

    pub fn from_slice(bytes: &[u8]) -> Result<Self, Error> {
        let array: [u8; 32] = bytes.try_into().map_err(|_| {
            Error::MalformedInput(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(Self(array))
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_array(self) -> [u8; 32] {
        self.0
    }
}

fn reversed_hex(bytes: &[u8]) -> String {
    let reversed: Vec<u8> = bytes.iter().rev().copied().collect();
    hex::encode(reversed)
}

fn parse_reversed_hex(input: &str, expected: usize) -> Result<Vec<u8>, Error> {
    let input = input.strip_prefix("0x").unwrap_or(input);
    let mut bytes = hex::decode(input).map_err(|e| Error::MalformedInput(format!("hex: {e}")))?;
    if bytes.len() != expected {
        return Err(Error::MalformedInput(format!(
            "expected {expected} bytes, got {}",
            bytes.len()
        )));
    }
    bytes.reverse();
    Ok(bytes)
}

impl fmt::Display for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", reversed_hex(&self.0))
    }
}

impl fmt::Debug for UInt160 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt160({self})")
    }
}

impl fmt::Display for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", reversed_hex(&self.0))
    }
}

impl fmt::Debug for UInt256 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UInt256({self})")
    }
}

impl FromStr for UInt160 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = parse_reversed_hex(s, Self::SIZE)?;
        Self::from_slice(&bytes)
    }
}

impl FromStr for UInt256 {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        let bytes = parse_reversed_hex(s, Self::SIZE)?;
        Self::from_slice(&bytes)
    }
}

impl From<[u8; 20]> for UInt160 {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

impl From<[u8; 32]> for UInt256 {
    fn from(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }
}

impl Serializable for UInt160 {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let mut bytes = [0u8; 20];
        bytes.copy_from_slice(reader.read_bytes(20)?);
        Ok(Self(bytes))
    }
}

impl Serializable for UInt256 {
    fn size(&self) -> usize {
        Self::SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_bytes(&self.0)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        let mut bytes = [0u8; 32];
        bytes.copy_from_slice(reader.read_bytes(32)?);
        Ok(Self(bytes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyra_io::SerializableExt;

    #[test]
    fn display_reverses_wire_order() {
        let mut bytes = [0u8; 20];
        bytes[0] = 0xaa;
        bytes[19] = 0xbb;
        let value = UInt160::new(bytes);
        let display = value.to_string();
        assert!(display.starts_with("0xbb"));
        assert!(display.ends_with("aa"));
        assert_eq!(display.parse::<UInt160>().unwrap(), value);
    }

    #[test]
    fn wire_encoding_is_not_reversed() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0x01;
        let value = UInt256::new(bytes);
        let encoded = value.to_array().to_vec();
        assert_eq!(value.to_array()[0], 0x01);
        assert_eq!(UInt256::from_array(&encoded).unwrap(), value);
    }

    #[test]
    fn from_slice_rejects_wrong_length() {
        assert!(UInt160::from_slice(&[0u8; 19]).is_err());
        assert!(UInt256::from_slice(&[0u8; 33]).is_err());
    }

    #[test]
    fn from_script_is_hash160() {
        let script = [0x51u8];
        assert_eq!(
            UInt160::from_script(&script).to_array(),
            crate::hash::hash160(&script)
        );
    }
}
