//! Transaction input wire type.
use crate::script::{Script, MAX_SCRIPT_LEN};
use crate::transaction::out_point::OutPoint;
use crate::util::{var_int, Error, Result, Serializable};
use std::io;
use std::io::{Read, Write};

/// Sequence value for inputs that opt out of replacement.
pub const DEFAULT_SEQUENCE: u32 = 0xffff_ffff;

/// Transaction input.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxIn {
    /// The previous output transaction reference.
    pub prev_output: OutPoint,
    /// Script authorizing the spend, empty until signed.
    pub unlock_script: Script,
    /// Sequence number as defined by the sender.
    pub sequence: u32,
}

impl TxIn {
    /// Creates an unsigned input spending the given outpoint.
    #[must_use]
    pub fn new(prev_output: OutPoint) -> TxIn {
        TxIn {
            prev_output,
            unlock_script: Script::new(),
            sequence: DEFAULT_SEQUENCE,
        }
    }

    /// Returns the size of the transaction input in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        OutPoint::SIZE
            + var_int::size(self.unlock_script.0.len() as u64)
            + self.unlock_script.0.len()
            + 4
    }
}

impl Serializable<TxIn> for TxIn {
    fn read(reader: &mut dyn Read) -> Result<TxIn> {
        let prev_output = OutPoint::read(reader)?;
        let script_len = var_int::read(reader)? as usize;
        if script_len > MAX_SCRIPT_LEN {
            return Err(Error::Deserialize(format!(
                "Unlock script too long: {}",
                script_len
            )));
        }
        let mut unlock_script = vec![0; script_len];
        reader
            .read_exact(&mut unlock_script)
            .map_err(|e| Error::Deserialize(format!("Unlock script: {}", e)))?;
        let mut sequence = [0u8; 4];
        reader
            .read_exact(&mut sequence)
            .map_err(|e| Error::Deserialize(format!("Sequence: {}", e)))?;
        let sequence = u32::from_le_bytes(sequence);
        Ok(TxIn {
            prev_output,
            unlock_script: Script(unlock_script),
            sequence,
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        self.prev_output.write(writer)?;
        var_int::write(self.unlock_script.0.len() as u64, writer)?;
        writer.write_all(&self.unlock_script.0)?;
        writer.write_all(&self.sequence.to_le_bytes())?;
        Ok(())
    }
}
