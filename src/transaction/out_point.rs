//! Outpoint referencing the transaction output an input spends.

use crate::util::{Error, Hash256, Result, Serializable};
use std::io;
use std::io::{Read, Write};

/// Reference to a transaction output.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct OutPoint {
    /// Hash of the referenced transaction, stored little-endian.
    pub hash: Hash256,
    /// Index of the output in the transaction, zero-indexed.
    pub index: u32,
}

impl OutPoint {
    /// Size of the out point in bytes (32 + 4 = 36).
    pub const SIZE: usize = 36;

    /// Returns the size of the out point in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        Self::SIZE
    }
}

impl Serializable<OutPoint> for OutPoint {
    fn read(reader: &mut dyn Read) -> Result<OutPoint> {
        let hash = Hash256::read(reader)?;
        let mut index = [0u8; 4];
        reader
            .read_exact(&mut index)
            .map_err(|e| Error::Deserialize(format!("OutPoint index: {}", e)))?;
        let index = u32::from_le_bytes(index);
        Ok(OutPoint { hash, index })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.hash.write(writer)?;
        writer.write_all(&self.index.to_le_bytes())
    }
}
