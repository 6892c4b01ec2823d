//! Sighash preimage and digest computation for post-fork signing.
//!
//! Implements the BIP-143 style algorithm used since the 2017 fork: the
//! preimage commits to transaction-wide midstate digests plus the signed
//! input's outpoint, script, value, and sequence. The midstates are cached
//! on the transaction, so signing many inputs stays O(n).

use crate::transaction::tx::Tx;
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use byteorder::{LittleEndian, WriteBytesExt};

/// Signs all outputs.
pub const SIGHASH_ALL: u8 = 0x01;
/// Signs no outputs (anyone spend).
pub const SIGHASH_NONE: u8 = 0x02;
/// Signs only the output matching the input index.
pub const SIGHASH_SINGLE: u8 = 0x03;
/// BSV/BCH fork flag (post-2017).
pub const SIGHASH_FORKID: u8 = 0x40;
/// Anyone can add inputs.
pub const SIGHASH_ANYONECANPAY: u8 = 0x80;
/// Mask extracting the base mode bits from a sighash type.
pub const SIGHASH_MASK: u8 = 0x1f;
/// Type used when a caller does not choose one.
pub const DEFAULT_SIGHASH_TYPE: u8 = SIGHASH_ALL | SIGHASH_FORKID;

/// Substitute digest for preimage slots a flag carves out. Zeroes keep the
/// preimage length fixed.
const ZERO_DIGEST: Hash256 = Hash256([0; 32]);

/// Satoshi value of the spent output for the preimage, either numeric or
/// already encoded as 8 little-endian bytes.
#[derive(Debug, Clone, Copy)]
pub enum SigHashValue {
    /// Numeric satoshis, serialized to LE-u64.
    Satoshis(u64),
    /// Pre-encoded 8-byte little-endian value, used verbatim.
    Encoded([u8; 8]),
}

impl SigHashValue {
    /// The 8 preimage bytes for this value.
    #[must_use]
    #[inline]
    pub fn to_le_bytes(self) -> [u8; 8] {
        match self {
            SigHashValue::Satoshis(n) => n.to_le_bytes(),
            SigHashValue::Encoded(b) => b,
        }
    }
}

impl From<u64> for SigHashValue {
    fn from(n: u64) -> Self {
        SigHashValue::Satoshis(n)
    }
}

/// Which outputs a signature commits to, from the low flag bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BaseMode {
    All,
    None,
    Single,
}

impl BaseMode {
    fn from_type(sighash_type: u8) -> BaseMode {
        match sighash_type & SIGHASH_MASK {
            SIGHASH_NONE => BaseMode::None,
            SIGHASH_SINGLE => BaseMode::Single,
            _ => BaseMode::All,
        }
    }
}

impl Tx {
    /// Builds the signature-hash preimage for one input.
    ///
    /// The preimage layout is fixed: version, prev-outs digest, sequences
    /// digest, the signed input's outpoint, the locking script being
    /// satisfied, the spent value, the input's sequence, outputs digest,
    /// lock time, and the full sighash type. ANYONECANPAY, NONE, and SINGLE
    /// substitute zero digests so a signature stops covering the carved-out
    /// slices.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` if `n_input` does not name an input.
    pub fn sighash_preimage(
        &mut self,
        n_input: usize,
        script_code: &[u8],
        satoshis: SigHashValue,
        sighash_type: u8,
    ) -> Result<Vec<u8>> {
        if n_input >= self.inputs.len() {
            return Err(Error::IndexOutOfRange(format!("Input {}", n_input)));
        }
        let anyone_can_pay = sighash_type & SIGHASH_ANYONECANPAY != 0;
        let mode = BaseMode::from_type(sighash_type);

        let prevouts = if anyone_can_pay {
            ZERO_DIGEST
        } else {
            self.prevouts_hash()?
        };
        let sequences = match (anyone_can_pay, mode) {
            (false, BaseMode::All) => self.sequences_hash()?,
            (true, _) | (false, BaseMode::Single) | (false, BaseMode::None) => ZERO_DIGEST,
        };
        let outputs = match mode {
            BaseMode::All => self.outputs_hash()?,
            BaseMode::Single if n_input < self.outputs.len() => {
                let mut single = Vec::with_capacity(self.outputs[n_input].size());
                self.outputs[n_input].write(&mut single)?;
                sha256d(&single)
            }
            BaseMode::Single | BaseMode::None => ZERO_DIGEST,
        };

        let mut s = Vec::with_capacity(
            156 + var_int::size(script_code.len() as u64) + script_code.len(),
        );
        s.write_u32::<LittleEndian>(self.version)?;
        s.extend_from_slice(&prevouts.0);
        s.extend_from_slice(&sequences.0);
        self.inputs[n_input].prev_output.write(&mut s)?;
        var_int::write(script_code.len() as u64, &mut s)?;
        s.extend_from_slice(script_code);
        s.extend_from_slice(&satoshis.to_le_bytes());
        s.write_u32::<LittleEndian>(self.inputs[n_input].sequence)?;
        s.extend_from_slice(&outputs.0);
        s.write_u32::<LittleEndian>(self.lock_time)?;
        s.write_u32::<LittleEndian>(u32::from(sighash_type))?;
        Ok(s)
    }

    /// Computes the sighash digest for one input: sha256d of the preimage.
    ///
    /// # Errors
    /// See [`Tx::sighash_preimage`].
    pub fn sighash(
        &mut self,
        n_input: usize,
        script_code: &[u8],
        satoshis: SigHashValue,
        sighash_type: u8,
    ) -> Result<Hash256> {
        let preimage = self.sighash_preimage(n_input, script_code, satoshis, sighash_type)?;
        Ok(sha256d(&preimage))
    }
}
