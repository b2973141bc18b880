use byteorder::{ByteOrder, LittleEndian};

use crate::{IoError, IoResult};

/// Cursor over an in-memory wire encoding.
///
/// Every read checks the remaining length first; a short stream surfaces as
/// [`IoError::EndOfStream`] rather than a panic or a truncated value.
pub struct MemoryReader<'a> {
    memory: &'a [u8],
    pos: usize,
}

impl<'a> MemoryReader<'a> {
    pub fn new(memory: &'a [u8]) -> Self {
        Self { memory, pos: 0 }
    }

    #[inline]
    fn ensure(&self, count: usize) -> IoResult<()> {
        let available = self.memory.len() - self.pos;
        if count > available {
            Err(IoError::EndOfStream {
                needed: count - available,
            })
        } else {
            Ok(())
        }
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn remaining(&self) -> usize {
        self.memory.len() - self.pos
    }

    pub fn read_bool(&mut self) -> IoResult<bool> {
        match self.read_u8()? {
            0 => Ok(false),
            1 => Ok(true),
            other => Err(IoError::InvalidData {
                context: "boolean".to_string(),
                value: other.to_string(),
            }),
        }
    }

    #[inline]
    pub fn read_u8(&mut self) -> IoResult<u8> {
        self.ensure(1)?;
        let value = self.memory[self.pos];
        self.pos += 1;
        Ok(value)
    }

    #[inline]
    pub fn read_u16(&mut self) -> IoResult<u16> {
        self.ensure(2)?;
        let value = LittleEndian::read_u16(&self.memory[self.pos..]);
        self.pos += 2;
        Ok(value)
    }

    #[inline]
    pub fn read_u32(&mut self) -> IoResult<u32> {
        self.ensure(4)?;
        let value = LittleEndian::read_u32(&self.memory[self.pos..]);
        self.pos += 4;
        Ok(value)
    }

    #[inline]
    pub fn read_u64(&mut self) -> IoResult<u64> {
        self.ensure(8)?;
        let value = LittleEndian::read_u64(&self.memory[self.pos..]);
        self.pos += 8;
        Ok(value)
    }

    #[inline]
    pub fn read_i64(&mut self) -> IoResult<i64> {
        self.ensure(8)?;
        let value = LittleEndian::read_i64(&self.memory[self.pos..]);
        self.pos += 8;
        Ok(value)
    }

    /// Reads a VarInt, branching on the marker byte, and rejects any value
    /// above `max` so length prefixes cannot request absurd allocations.
    pub fn read_var_int(&mut self, max: u64) -> IoResult<u64> {
        let marker = self.read_u8()?;
        let value = match marker {
            0xfd => self.read_u16()? as u64,
            0xfe => self.read_u32()? as u64,
            0xff => self.read_u64()?,
            byte => byte as u64,
        };
        if value > max {
            return Err(IoError::MalformedLength { value, max });
        }
        Ok(value)
    }

    #[inline]
    pub fn read_bytes(&mut self, count: usize) -> IoResult<&'a [u8]> {
        self.ensure(count)?;
        let result = &self.memory[self.pos..self.pos + count];
        self.pos += count;
        Ok(result)
    }

    pub fn read_var_bytes(&mut self, max: usize) -> IoResult<&'a [u8]> {
        let length = self.read_var_int(max as u64)? as usize;
        self.read_bytes(length)
    }

    pub fn read_var_string(&mut self, max: usize) -> IoResult<String> {
        let bytes = self.read_var_bytes(max)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| IoError::InvalidData {
            context: "string".to_string(),
            value: "invalid UTF-8".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BinaryWriter;
    use proptest::prelude::*;

    #[test]
    fn var_int_round_trip_boundaries() {
        for value in [
            0x00u64,
            0xfc,
            0xfd,
            0xffff,
            0x10000,
            0xffff_ffff,
            0x1_0000_0000,
        ] {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value).unwrap();
            let bytes = writer.to_bytes();
            let mut reader = MemoryReader::new(&bytes);
            assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
            assert_eq!(reader.remaining(), 0);
        }
    }

    #[test]
    fn var_int_respects_max() {
        let mut writer = BinaryWriter::new();
        writer.write_var_int(300).unwrap();
        let bytes = writer.to_bytes();
        let mut reader = MemoryReader::new(&bytes);
        assert_eq!(
            reader.read_var_int(255),
            Err(IoError::MalformedLength {
                value: 300,
                max: 255
            })
        );
    }

    #[test]
    fn short_stream_is_end_of_stream() {
        let mut reader = MemoryReader::new(&[0x01, 0x02]);
        assert!(matches!(
            reader.read_u32(),
            Err(IoError::EndOfStream { needed: 2 })
        ));
    }

    #[test]
    fn truncated_var_bytes_fails() {
        // Length prefix promises five bytes, stream holds two.
        let mut reader = MemoryReader::new(&[0x05, 0xaa, 0xbb]);
        assert!(matches!(
            reader.read_var_bytes(1024),
            Err(IoError::EndOfStream { .. })
        ));
    }

    proptest! {
        #[test]
        fn var_int_round_trip(value in any::<u64>()) {
            let mut writer = BinaryWriter::new();
            writer.write_var_int(value).unwrap();
            let bytes = writer.to_bytes();
            let mut reader = MemoryReader::new(&bytes);
            prop_assert_eq!(reader.read_var_int(u64::MAX).unwrap(), value);
        }

        #[test]
        fn var_bytes_round_trip(data in proptest::collection::vec(any::<u8>(), 0..512)) {
            let mut writer = BinaryWriter::new();
            writer.write_var_bytes(&data).unwrap();
            let bytes = writer.to_bytes();
            let mut reader = MemoryReader::new(&bytes);
            prop_assert_eq!(reader.read_var_bytes(1024).unwrap(), &data[..]);
        }
    }
}
