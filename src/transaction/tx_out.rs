//! Transaction output wire type.

use crate::script::{Script, MAX_SCRIPT_LEN};
use crate::util::{var_int, Error, Result, Serializable};
use std::io;
use std::io::{Read, Write};

/// Maximum number of satoshis possible (21M BSV).
pub const MAX_SATOSHIS: u64 = 21_000_000 * 100_000_000;

/// Transaction output.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct TxOut {
    /// Number of satoshis locked by this output.
    pub satoshis: u64,
    /// Script the spender must satisfy to claim the output.
    pub lock_script: Script,
}

impl TxOut {
    /// Returns the size of the transaction output in bytes.
    #[must_use]
    #[inline]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.lock_script.0.len() as u64) + self.lock_script.0.len()
    }

    /// Validates the transaction output.
    ///
    /// # Errors
    /// `Error::BadData` if satoshis exceed the issuance cap or the lock
    /// script exceeds the length cap.
    pub fn validate(&self) -> Result<()> {
        if self.satoshis > MAX_SATOSHIS {
            return Err(Error::BadData("Satoshis exceeds max".to_string()));
        }
        if self.lock_script.0.len() > MAX_SCRIPT_LEN {
            return Err(Error::BadData(format!(
                "Lock script too long: {}",
                self.lock_script.0.len()
            )));
        }
        Ok(())
    }
}

impl Serializable<TxOut> for TxOut {
    fn read(reader: &mut dyn Read) -> Result<TxOut> {
        let mut satoshis = [0u8; 8];
        reader
            .read_exact(&mut satoshis)
            .map_err(|e| Error::Deserialize(format!("Satoshis: {}", e)))?;
        let satoshis = u64::from_le_bytes(satoshis);
        let script_len = var_int::read(reader)? as usize;
        if script_len > MAX_SCRIPT_LEN {
            return Err(Error::Deserialize(format!(
                "Lock script too long: {}",
                script_len
            )));
        }
        let mut lock_script = vec![0; script_len];
        reader
            .read_exact(&mut lock_script)
            .map_err(|e| Error::Deserialize(format!("Lock script: {}", e)))?;
        Ok(TxOut {
            satoshis,
            lock_script: Script(lock_script),
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.satoshis.to_le_bytes())?;
        var_int::write(self.lock_script.0.len() as u64, writer)?;
        writer.write_all(&self.lock_script.0)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    #[test]
    fn write_read() {
        let mut v = Vec::new();
        let t = TxOut {
            satoshis: 4400044000,
            lock_script: Script(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 100, 99, 98, 97, 96]),
        };
        t.write(&mut v).unwrap();
        assert_eq!(v.len(), t.size());
        assert_eq!(TxOut::read(&mut Cursor::new(&v)).unwrap(), t);
    }

    #[test]
    fn validate() {
        let t = TxOut {
            satoshis: 4400044000,
            lock_script: Script(vec![1; 100]),
        };
        assert!(t.validate().is_ok());
        let t = TxOut {
            satoshis: MAX_SATOSHIS + 1,
            lock_script: Script(vec![1; 100]),
        };
        assert_eq!(
            t.validate().unwrap_err().to_string(),
            "Bad data: Satoshis exceeds max"
        );
        let t = TxOut {
            satoshis: 1000,
            lock_script: Script(vec![1; MAX_SCRIPT_LEN + 1]),
        };
        assert_eq!(
            t.validate().unwrap_err().to_string(),
            format!("Bad data: Lock script too long: {}", MAX_SCRIPT_LEN + 1)
        );
    }

    #[test]
    fn read_invalid() {
        // Script length claims far more than the buffer holds
        let b = hex::decode("00e1f50500000000fe05000f000000000000000000").unwrap();
        assert!(TxOut::read(&mut Cursor::new(&b)).is_err());
    }
}
