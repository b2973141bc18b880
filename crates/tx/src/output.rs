//! Transaction outputs.

use lyra_crypto::{UInt160, UInt256};
use lyra_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::fixed8::Fixed8;

/// Assigns an amount of one asset to a script hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransactionOutput {
    pub asset_id: UInt256,
    pub value: Fixed8,
    pub script_hash: UInt160,
}

impl Serializable for TransactionOutput {
    fn size(&self) -> usize {
        UInt256::SIZE + 8 + UInt160::SIZE
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.asset_id.serialize(writer)?;
        self.value.serialize(writer)?;
        self.script_hash.serialize(writer)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            asset_id: UInt256::deserialize(reader)?,
            value: Fixed8::deserialize(reader)?,
            script_hash: UInt160::deserialize(reader)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyra_io::SerializableExt;

    #[test]
    fn round_trip_is_sixty_bytes() {
        let output = TransactionOutput {
            asset_id: UInt256::new([0x22; 32]),
            value: Fixed8::from_raw(250_000_000),
            script_hash: UInt160::new([0xdf; 20]),
        };
        let bytes = output.to_array().unwrap();
        assert_eq!(bytes.len(), 60);
        assert_eq!(TransactionOutput::from_array(&bytes).unwrap(), output);
    }
}
