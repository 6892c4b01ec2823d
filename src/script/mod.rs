//! Script byte handling: construction helpers and push-data encoding.
//!
//! The signing core only builds and inspects scripts; evaluation belongs to
//! consensus nodes.

pub mod op_codes;

use crate::util::{Error, Result};
use byteorder::{LittleEndian, WriteBytesExt};
use std::fmt;

use self::op_codes::{OP_PUSHDATA1, OP_PUSHDATA2, OP_PUSHDATA4};

/// Maximum script length accepted when deserializing, a sanity cap well above
/// typical token protocol scripts.
pub const MAX_SCRIPT_LEN: usize = 1_000_000;

/// Transaction script, lock or unlock.
#[derive(Debug, Default, PartialEq, Eq, Hash, Clone)]
pub struct Script(pub Vec<u8>);

impl Script {
    /// Creates a new empty script.
    #[must_use]
    pub fn new() -> Script {
        Script(Vec::new())
    }

    /// Appends a single opcode or byte.
    #[inline]
    pub fn append(&mut self, byte: u8) {
        self.0.push(byte);
    }

    /// Appends raw bytes without a push opcode.
    #[inline]
    pub fn append_slice(&mut self, slice: &[u8]) {
        self.0.extend_from_slice(slice);
    }

    /// Appends a data push: length under Bitcoin push rules, then the bytes.
    ///
    /// Lengths below 76 use a direct push; longer data uses OP_PUSHDATA1,
    /// OP_PUSHDATA2, or OP_PUSHDATA4.
    ///
    /// # Errors
    /// `Error::BadArgument` if the data exceeds the 4-byte push length limit.
    pub fn append_data(&mut self, data: &[u8]) -> Result<()> {
        match data.len() {
            len if len < OP_PUSHDATA1 as usize => self.0.push(len as u8),
            len if len <= 0xff => {
                self.0.push(OP_PUSHDATA1);
                self.0.push(len as u8);
            }
            len if len <= 0xffff => {
                self.0.push(OP_PUSHDATA2);
                self.0.write_u16::<LittleEndian>(len as u16)?;
            }
            len if len <= 0xffff_ffff => {
                self.0.push(OP_PUSHDATA4);
                self.0.write_u32::<LittleEndian>(len as u32)?;
            }
            len => {
                return Err(Error::BadArgument(format!("Data push too long: {}", len)));
            }
        }
        self.0.extend_from_slice(data);
        Ok(())
    }
}

impl fmt::Display for Script {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

/// Gets the next operation index in the script, or the script length if at the end.
#[must_use]
pub fn next_op(i: usize, script: &[u8]) -> usize {
    if i >= script.len() {
        return script.len();
    }
    let op = script[i];
    match op {
        len @ 1..=75 => i + 1 + len as usize,
        OP_PUSHDATA1 => {
            if i + 2 > script.len() {
                script.len()
            } else {
                i + 2 + script[i + 1] as usize
            }
        }
        OP_PUSHDATA2 => {
            if i + 3 > script.len() {
                script.len()
            } else {
                i + 3 + u16::from_le_bytes([script[i + 1], script[i + 2]]) as usize
            }
        }
        OP_PUSHDATA4 => {
            if i + 5 > script.len() {
                script.len()
            } else {
                i + 5
                    + u32::from_le_bytes([
                        script[i + 1],
                        script[i + 2],
                        script[i + 3],
                        script[i + 4],
                    ]) as usize
            }
        }
        _ => i + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn append_data_direct() {
        let mut s = Script::new();
        s.append_data(&[7; 5]).unwrap();
        assert_eq!(s.0, vec![5, 7, 7, 7, 7, 7]);
    }

    #[test]
    fn append_data_boundaries() {
        let mut s = Script::new();
        s.append_data(&[1; 75]).unwrap();
        assert_eq!(s.0[0], 75);
        assert_eq!(s.0.len(), 76);

        let mut s = Script::new();
        s.append_data(&[1; 76]).unwrap();
        assert_eq!(&s.0[..2], &[OP_PUSHDATA1, 76]);
        assert_eq!(s.0.len(), 78);

        let mut s = Script::new();
        s.append_data(&[1; 255]).unwrap();
        assert_eq!(&s.0[..2], &[OP_PUSHDATA1, 255]);

        let mut s = Script::new();
        s.append_data(&[1; 256]).unwrap();
        assert_eq!(&s.0[..3], &[OP_PUSHDATA2, 0x00, 0x01]);

        let mut s = Script::new();
        s.append_data(&[1; 65536]).unwrap();
        assert_eq!(&s.0[..5], &[OP_PUSHDATA4, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn next_op_walk() {
        let mut s = Script::new();
        s.append_data(&[1; 10]).unwrap();
        s.append_data(&[2; 100]).unwrap();
        s.append(op_codes::OP_CHECKSIG);
        let i = next_op(0, &s.0);
        assert_eq!(i, 11);
        let i = next_op(i, &s.0);
        assert_eq!(i, 11 + 2 + 100);
        let i = next_op(i, &s.0);
        assert_eq!(i, s.0.len());
    }
}
