//! Spendable coins and the input references that consume them.

use lyra_crypto::UInt256;
use lyra_io::{BinaryWriter, IoResult, MemoryReader, Serializable};

use crate::fixed8::Fixed8;

/// An unspent output as reported by an external balance source. Coins are
/// inputs to transaction building; they never appear on the wire themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Coin {
    /// Transaction that created the output.
    pub transaction_id: UInt256,
    /// Output position within that transaction.
    pub index: u16,
    /// Asset the output holds.
    pub asset_id: UInt256,
    /// Amount the output holds.
    pub value: Fixed8,
}

impl Coin {
    /// The input reference that spends this coin.
    pub fn reference(&self) -> CoinReference {
        CoinReference {
            prev_hash: self.transaction_id,
            prev_index: self.index,
        }
    }
}

/// A pointer to a prior output: transaction id plus output index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinReference {
    pub prev_hash: UInt256,
    pub prev_index: u16,
}

impl Serializable for CoinReference {
    fn size(&self) -> usize {
        UInt256::SIZE + 2
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        self.prev_hash.serialize(writer)?;
        writer.write_u16(self.prev_index)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            prev_hash: UInt256::deserialize(reader)?,
            prev_index: reader.read_u16()?,
        })
    }
}
