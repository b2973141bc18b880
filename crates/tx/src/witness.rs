//! Witnesses: the authorization attached to a signed transaction.

use lyra_io::{helper, BinaryWriter, IoResult, MemoryReader, Serializable};

/// Largest script a witness may carry.
const MAX_SCRIPT_LEN: usize = 0x10000;

/// An invocation script that pushes arguments (here, a signature) paired
/// with the verification script those arguments satisfy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Witness {
    pub invocation_script: Vec<u8>,
    pub verification_script: Vec<u8>,
}

impl Serializable for Witness {
    fn size(&self) -> usize {
        helper::get_var_bytes_size(&self.invocation_script)
            + helper::get_var_bytes_size(&self.verification_script)
    }

    fn serialize(&self, writer: &mut BinaryWriter) -> IoResult<()> {
        writer.write_var_bytes(&self.invocation_script)?;
        writer.write_var_bytes(&self.verification_script)
    }

    fn deserialize(reader: &mut MemoryReader) -> IoResult<Self> {
        Ok(Self {
            invocation_script: reader.read_var_bytes(MAX_SCRIPT_LEN)?.to_vec(),
            verification_script: reader.read_var_bytes(MAX_SCRIPT_LEN)?.to_vec(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lyra_io::SerializableExt;

    #[test]
    fn round_trip() {
        let witness = Witness {
            invocation_script: vec![0x40; 65],
            verification_script: vec![0xac; 107],
        };
        let bytes = witness.to_array().unwrap();
        assert_eq!(bytes.len(), witness.size());
        assert_eq!(Witness::from_array(&bytes).unwrap(), witness);
    }
}
