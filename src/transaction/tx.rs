//! Transaction container: wire codec, cached sighash midstates, supplements,
//! and satoshi accounting.

use crate::script::Script;
use crate::transaction::out_point::OutPoint;
use crate::transaction::tx_in::TxIn;
use crate::transaction::tx_out::TxOut;
use crate::util::{sha256d, var_int, Error, Hash256, Result, Serializable};
use std::fmt;
use std::io;
use std::io::{Cursor, Read, Write};

/// Maximum number of inputs/outputs (safety cap for large txs).
const MAX_INPUTS: u64 = 100_000_000;
const MAX_OUTPUTS: u64 = 100_000_000;

/// Off-wire metadata for one input: the satoshis its previous output held
/// and which of the signer's keys owns it, when known.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct InputSupplement {
    /// Satoshis held by the previous output. Required for fee accounting.
    pub satoshis: Option<u64>,
    /// Identifier of the signer's key that owns the spent output, if any.
    pub key_id: Option<String>,
}

/// Off-wire metadata for one output: whether it is change back to the signer.
#[derive(Debug, Default, PartialEq, Eq, Clone)]
pub struct OutputSupplement {
    /// Identifier of the signer's key the output pays back to, if any.
    pub key_id: Option<String>,
}

/// Serialized transaction in one of the accepted encodings.
#[derive(Debug, Clone, Copy)]
pub enum RawTx<'a> {
    /// Hex string of the wire bytes.
    Hex(&'a str),
    /// Wire bytes.
    Bytes(&'a [u8]),
}

/// Memoized digests over the transaction-wide sighash components.
///
/// A digest is valid only while the slice it covers is unchanged; every
/// mutator that touches a covered slice clears the matching entry.
#[derive(Debug, Default, Clone)]
pub(crate) struct Midstates {
    pub(crate) prevouts: Option<Hash256>,
    pub(crate) sequences: Option<Hash256>,
    pub(crate) outputs: Option<Hash256>,
}

/// Bitcoin transaction under construction or signing.
///
/// Fields are private so that every mutation flows through a method that
/// knows which midstate caches to invalidate.
#[derive(Default, Clone)]
pub struct Tx {
    pub(crate) version: u32,
    pub(crate) inputs: Vec<TxIn>,
    pub(crate) outputs: Vec<TxOut>,
    pub(crate) lock_time: u32,
    pub(crate) input_supplements: Vec<InputSupplement>,
    pub(crate) output_supplements: Vec<OutputSupplement>,
    pub(crate) midstates: Midstates,
}

impl Tx {
    /// Creates an empty transaction with version 1 and lock time 0.
    #[must_use]
    pub fn new() -> Tx {
        Tx {
            version: 1,
            ..Default::default()
        }
    }

    /// Parses a transaction from either accepted serialized encoding.
    ///
    /// # Errors
    /// Hex errors for an invalid hex payload; `Error::Deserialize` for
    /// malformed bytes.
    pub fn from_raw(raw: RawTx) -> Result<Tx> {
        match raw {
            RawTx::Hex(s) => Self::from_hex(s),
            RawTx::Bytes(b) => Self::from_bytes(b),
        }
    }

    /// Parses a transaction from a hex string of the wire bytes.
    ///
    /// # Errors
    /// See [`Tx::from_raw`].
    pub fn from_hex(s: &str) -> Result<Tx> {
        let bytes = hex::decode(s)?;
        Self::from_bytes(&bytes)
    }

    /// Parses a transaction from wire bytes, rejecting trailing data.
    ///
    /// # Errors
    /// `Error::Deserialize` for truncated or oversized payloads.
    pub fn from_bytes(bytes: &[u8]) -> Result<Tx> {
        let mut cursor = Cursor::new(bytes);
        let tx = Tx::read(&mut cursor)?;
        let consumed = cursor.position() as usize;
        if consumed != bytes.len() {
            return Err(Error::Deserialize(format!(
                "Trailing {} bytes after transaction",
                bytes.len() - consumed
            )));
        }
        Ok(tx)
    }

    /// Transaction version.
    #[must_use]
    #[inline]
    pub fn version(&self) -> u32 {
        self.version
    }

    /// Block height or timestamp at which the transaction unlocks.
    #[must_use]
    #[inline]
    pub fn lock_time(&self) -> u32 {
        self.lock_time
    }

    /// Transaction inputs in consensus order.
    #[must_use]
    #[inline]
    pub fn inputs(&self) -> &[TxIn] {
        &self.inputs
    }

    /// Transaction outputs in consensus order.
    #[must_use]
    #[inline]
    pub fn outputs(&self) -> &[TxOut] {
        &self.outputs
    }

    /// Input supplements, aligned 1:1 with the inputs.
    #[must_use]
    #[inline]
    pub fn input_supplements(&self) -> &[InputSupplement] {
        &self.input_supplements
    }

    /// Output supplements, aligned 1:1 with the outputs.
    #[must_use]
    #[inline]
    pub fn output_supplements(&self) -> &[OutputSupplement] {
        &self.output_supplements
    }

    /// Sets the transaction version.
    pub fn set_version(&mut self, version: u32) {
        self.version = version;
    }

    /// Sets the lock time.
    pub fn set_lock_time(&mut self, lock_time: u32) {
        self.lock_time = lock_time;
    }

    /// Appends an input along with an empty supplement.
    pub fn add_input(&mut self, input: TxIn) {
        self.inputs.push(input);
        self.input_supplements.push(InputSupplement::default());
        self.midstates.prevouts = None;
        self.midstates.sequences = None;
    }

    /// Appends an output along with an empty supplement.
    pub fn add_output(&mut self, output: TxOut) {
        self.outputs.push(output);
        self.output_supplements.push(OutputSupplement::default());
        self.midstates.outputs = None;
    }

    /// Sets an input's sequence number.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_sequence(&mut self, index: usize, sequence: u32) -> Result<()> {
        let input = self
            .inputs
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Input {}", index)))?;
        input.sequence = sequence;
        self.midstates.sequences = None;
        Ok(())
    }

    /// Sets an input's unlock script. No midstate covers unlock scripts, so
    /// no cache is touched.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_unlock_script(&mut self, index: usize, script: Script) -> Result<()> {
        let input = self
            .inputs
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Input {}", index)))?;
        input.unlock_script = script;
        Ok(())
    }

    /// Sets an output's satoshi value.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_output_satoshis(&mut self, index: usize, satoshis: u64) -> Result<()> {
        let output = self
            .outputs
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Output {}", index)))?;
        output.satoshis = satoshis;
        self.midstates.outputs = None;
        Ok(())
    }

    /// Sets an output's lock script.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_output_lock_script(&mut self, index: usize, script: Script) -> Result<()> {
        let output = self
            .outputs
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Output {}", index)))?;
        output.lock_script = script;
        self.midstates.outputs = None;
        Ok(())
    }

    /// Sets the supplement for one input.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_input_supplement(
        &mut self,
        index: usize,
        supplement: InputSupplement,
    ) -> Result<()> {
        let slot = self
            .input_supplements
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Input supplement {}", index)))?;
        *slot = supplement;
        Ok(())
    }

    /// Sets the supplement for one output.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad index.
    pub fn set_output_supplement(
        &mut self,
        index: usize,
        supplement: OutputSupplement,
    ) -> Result<()> {
        let slot = self
            .output_supplements
            .get_mut(index)
            .ok_or_else(|| Error::IndexOutOfRange(format!("Output supplement {}", index)))?;
        *slot = supplement;
        Ok(())
    }

    /// Replaces all input supplements at once.
    ///
    /// # Errors
    /// `Error::Alignment` unless exactly one supplement per input is given.
    pub fn set_input_supplements(&mut self, supplements: Vec<InputSupplement>) -> Result<()> {
        if supplements.len() != self.inputs.len() {
            return Err(Error::Alignment(format!(
                "{} supplements for {} inputs",
                supplements.len(),
                self.inputs.len()
            )));
        }
        self.input_supplements = supplements;
        Ok(())
    }

    /// Replaces all output supplements at once.
    ///
    /// # Errors
    /// `Error::Alignment` unless exactly one supplement per output is given.
    pub fn set_output_supplements(&mut self, supplements: Vec<OutputSupplement>) -> Result<()> {
        if supplements.len() != self.outputs.len() {
            return Err(Error::Alignment(format!(
                "{} supplements for {} outputs",
                supplements.len(),
                self.outputs.len()
            )));
        }
        self.output_supplements = supplements;
        Ok(())
    }

    /// Drops all memoized sighash midstates.
    pub fn clear_sig_hashes(&mut self) {
        self.midstates = Midstates::default();
    }

    /// Digest over every input's outpoint, memoized.
    ///
    /// # Errors
    /// IO errors from serialization.
    pub fn prevouts_hash(&mut self) -> Result<Hash256> {
        if let Some(hash) = self.midstates.prevouts {
            return Ok(hash);
        }
        let mut b = Vec::with_capacity(OutPoint::SIZE * self.inputs.len());
        for input in &self.inputs {
            input.prev_output.write(&mut b)?;
        }
        let hash = sha256d(&b);
        self.midstates.prevouts = Some(hash);
        Ok(hash)
    }

    /// Digest over every input's sequence number, memoized.
    ///
    /// # Errors
    /// IO errors from serialization.
    pub fn sequences_hash(&mut self) -> Result<Hash256> {
        if let Some(hash) = self.midstates.sequences {
            return Ok(hash);
        }
        let mut b = Vec::with_capacity(4 * self.inputs.len());
        for input in &self.inputs {
            b.extend_from_slice(&input.sequence.to_le_bytes());
        }
        let hash = sha256d(&b);
        self.midstates.sequences = Some(hash);
        Ok(hash)
    }

    /// Digest over every serialized output, memoized.
    ///
    /// # Errors
    /// IO errors from serialization.
    pub fn outputs_hash(&mut self) -> Result<Hash256> {
        if let Some(hash) = self.midstates.outputs {
            return Ok(hash);
        }
        let size = self.outputs.iter().map(TxOut::size).sum();
        let mut b = Vec::with_capacity(size);
        for output in &self.outputs {
            output.write(&mut b)?;
        }
        let hash = sha256d(&b);
        self.midstates.outputs = Some(hash);
        Ok(hash)
    }

    /// Serializes the transaction to wire bytes.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut b = Vec::with_capacity(self.size());
        self.write(&mut b).unwrap();
        b
    }

    /// Calculates the hash of the transaction (txid).
    #[must_use]
    pub fn hash(&self) -> Hash256 {
        sha256d(&self.to_bytes())
    }

    /// Returns the serialized size of the transaction in bytes.
    #[must_use]
    pub fn size(&self) -> usize {
        8 + var_int::size(self.inputs.len() as u64)
            + self.inputs.iter().map(TxIn::size).sum::<usize>()
            + var_int::size(self.outputs.len() as u64)
            + self.outputs.iter().map(TxOut::size).sum::<usize>()
    }

    /// Fee in satoshis: input supplement values minus output values.
    ///
    /// # Errors
    /// `Error::Alignment` if the supplements do not line up with the inputs,
    /// `Error::MissingSupplement` if any input lacks a value, `Error::BadData`
    /// if the result does not fit an `i64`.
    pub fn fee(&self) -> Result<i64> {
        if self.input_supplements.len() != self.inputs.len() {
            return Err(Error::Alignment(format!(
                "{} supplements for {} inputs",
                self.input_supplements.len(),
                self.inputs.len()
            )));
        }
        let mut total_in: i128 = 0;
        for (index, supplement) in self.input_supplements.iter().enumerate() {
            let satoshis = supplement.satoshis.ok_or_else(|| {
                Error::MissingSupplement(format!("No value for input {}", index))
            })?;
            total_in += i128::from(satoshis);
        }
        let total_out: i128 = self.outputs.iter().map(|o| i128::from(o.satoshis)).sum();
        i64::try_from(total_in - total_out)
            .map_err(|_| Error::BadData("Fee exceeds 64 bits".to_string()))
    }

    /// Net satoshis leaving this signer: values spent from owned inputs minus
    /// values returned to owned outputs.
    ///
    /// Ownership is marked by a supplement `key_id`; a `None` key means "not
    /// ours" and is skipped, but an owned input without a value fails.
    ///
    /// # Errors
    /// `Error::Alignment`, `Error::MissingSupplement`, or `Error::BadData` as
    /// for [`Tx::fee`].
    pub fn spend_amount(&self) -> Result<i64> {
        if self.input_supplements.len() != self.inputs.len() {
            return Err(Error::Alignment(format!(
                "{} supplements for {} inputs",
                self.input_supplements.len(),
                self.inputs.len()
            )));
        }
        if self.output_supplements.len() != self.outputs.len() {
            return Err(Error::Alignment(format!(
                "{} supplements for {} outputs",
                self.output_supplements.len(),
                self.outputs.len()
            )));
        }
        let mut spent: i128 = 0;
        for (index, supplement) in self.input_supplements.iter().enumerate() {
            if supplement.key_id.is_none() {
                continue;
            }
            let satoshis = supplement.satoshis.ok_or_else(|| {
                Error::MissingSupplement(format!("No value for owned input {}", index))
            })?;
            spent += i128::from(satoshis);
        }
        let mut returned: i128 = 0;
        for (output, supplement) in self.outputs.iter().zip(&self.output_supplements) {
            if supplement.key_id.is_some() {
                returned += i128::from(output.satoshis);
            }
        }
        i64::try_from(spent - returned)
            .map_err(|_| Error::BadData("Spend amount exceeds 64 bits".to_string()))
    }
}

impl Serializable<Tx> for Tx {
    fn read(reader: &mut dyn Read) -> Result<Tx> {
        let mut version = [0u8; 4];
        reader
            .read_exact(&mut version)
            .map_err(|e| Error::Deserialize(format!("Version: {}", e)))?;
        let version = u32::from_le_bytes(version);
        let n_inputs = var_int::read(reader)?;
        if n_inputs > MAX_INPUTS {
            return Err(Error::Deserialize(format!("Too many inputs: {}", n_inputs)));
        }
        let mut inputs = Vec::with_capacity(n_inputs as usize);
        for _ in 0..n_inputs {
            inputs.push(TxIn::read(reader)?);
        }
        let n_outputs = var_int::read(reader)?;
        if n_outputs > MAX_OUTPUTS {
            return Err(Error::Deserialize(format!(
                "Too many outputs: {}",
                n_outputs
            )));
        }
        let mut outputs = Vec::with_capacity(n_outputs as usize);
        for _ in 0..n_outputs {
            outputs.push(TxOut::read(reader)?);
        }
        let mut lock_time = [0u8; 4];
        reader
            .read_exact(&mut lock_time)
            .map_err(|e| Error::Deserialize(format!("Lock time: {}", e)))?;
        let lock_time = u32::from_le_bytes(lock_time);
        let input_supplements = vec![InputSupplement::default(); inputs.len()];
        let output_supplements = vec![OutputSupplement::default(); outputs.len()];
        Ok(Tx {
            version,
            inputs,
            outputs,
            lock_time,
            input_supplements,
            output_supplements,
            midstates: Midstates::default(),
        })
    }

    fn write(&self, writer: &mut dyn Write) -> io::Result<()> {
        writer.write_all(&self.version.to_le_bytes())?;
        var_int::write(self.inputs.len() as u64, writer)?;
        for tx_in in &self.inputs {
            tx_in.write(writer)?;
        }
        var_int::write(self.outputs.len() as u64, writer)?;
        for tx_out in &self.outputs {
            tx_out.write(writer)?;
        }
        writer.write_all(&self.lock_time.to_le_bytes())?;
        Ok(())
    }
}

/// Equality over the serialized fields only; supplements and cached
/// midstates do not take part.
impl PartialEq for Tx {
    fn eq(&self, other: &Tx) -> bool {
        self.version == other.version
            && self.inputs == other.inputs
            && self.outputs == other.outputs
            && self.lock_time == other.lock_time
    }
}

impl Eq for Tx {}

impl fmt::Debug for Tx {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let inputs_str = format!("[<{} inputs>]", self.inputs.len());
        let outputs_str = format!("[<{} outputs>]", self.outputs.len());
        f.debug_struct("Tx")
            .field("version", &self.version)
            .field(
                "inputs",
                if self.inputs.len() <= 3 {
                    &self.inputs
                } else {
                    &inputs_str
                },
            )
            .field(
                "outputs",
                if self.outputs.len() <= 3 {
                    &self.outputs
                } else {
                    &outputs_str
                },
            )
            .field("lock_time", &self.lock_time)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::script::Script;
    use pretty_assertions::assert_eq;

    #[test]
    fn write_read() {
        let mut tx = Tx::new();
        tx.set_version(1);
        tx.set_lock_time(1000);
        tx.add_input(TxIn {
            prev_output: OutPoint {
                hash: Hash256([9; 32]),
                index: 9,
            },
            unlock_script: Script(vec![1, 3, 5, 7, 9]),
            sequence: 100,
        });
        tx.add_input(TxIn {
            prev_output: OutPoint {
                hash: Hash256([0; 32]),
                index: 8,
            },
            unlock_script: Script(vec![3; 333]),
            sequence: 22,
        });
        tx.add_output(TxOut {
            satoshis: 99,
            lock_script: Script(vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 100, 99, 98, 97, 96]),
        });
        tx.add_output(TxOut {
            satoshis: 199,
            lock_script: Script(vec![56, 78, 90, 90, 78, 56]),
        });
        let v = tx.to_bytes();
        assert_eq!(v.len(), tx.size());
        assert_eq!(Tx::from_bytes(&v).unwrap(), tx);
    }

    #[test]
    fn empty_tx_round_trip() {
        let bytes = hex::decode("01000000000000000000").unwrap();
        let tx = Tx::from_hex("01000000000000000000").unwrap();
        assert_eq!(tx.version(), 1);
        assert_eq!(tx.inputs().len(), 0);
        assert_eq!(tx.outputs().len(), 0);
        assert_eq!(tx.lock_time(), 0);
        assert_eq!(tx.to_bytes(), bytes);
        assert_eq!(tx.hash(), sha256d(&bytes));
    }

    #[test]
    fn raw_variants_agree() {
        let hex_str = "01000000000000000000";
        let bytes = hex::decode(hex_str).unwrap();
        let from_hex = Tx::from_raw(RawTx::Hex(hex_str)).unwrap();
        let from_bytes = Tx::from_raw(RawTx::Bytes(&bytes)).unwrap();
        assert_eq!(from_hex, from_bytes);
        assert!(Tx::from_raw(RawTx::Hex("010000000000000000zz")).is_err());
    }

    #[test]
    fn trailing_bytes_rejected() {
        let mut bytes = hex::decode("01000000000000000000").unwrap();
        bytes.push(0);
        assert!(Tx::from_bytes(&bytes).is_err());
    }

    #[test]
    fn coinbase_hash() {
        let mut tx = Tx::new();
        tx.add_input(TxIn {
            prev_output: OutPoint {
                hash: Hash256([0; 32]),
                index: 0xffffffff,
            },
            unlock_script: Script(vec![4, 255, 255, 0, 29, 1, 11]),
            sequence: 0xffffffff,
        });
        tx.add_output(TxOut {
            satoshis: 5000000000,
            lock_script: Script(vec![
                65, 4, 114, 17, 168, 36, 245, 91, 80, 82, 40, 228, 195, 213, 25, 76, 31, 207,
                170, 21, 164, 86, 171, 223, 55, 249, 185, 217, 122, 64, 64, 175, 192, 115, 222,
                230, 200, 144, 100, 152, 79, 3, 56, 82, 55, 217, 33, 103, 193, 62, 35, 100, 70,
                180, 23, 171, 121, 160, 252, 174, 65, 42, 227, 49, 107, 119, 172,
            ]),
        });
        let h = "9b0fc92260312ce44e74ef369f5c66bbb85848f2eddd5a7a1cde251e54ccfdd5";
        assert_eq!(tx.hash(), Hash256::decode(h).unwrap());
    }

    #[test]
    fn supplements_align_with_sides() {
        let mut tx = Tx::new();
        tx.add_input(TxIn::default());
        tx.add_output(TxOut::default());
        assert_eq!(tx.input_supplements().len(), 1);
        assert_eq!(tx.output_supplements().len(), 1);
        assert!(tx
            .set_input_supplements(vec![InputSupplement::default(); 2])
            .is_err());
        assert!(tx.set_output_supplements(vec![]).is_err());
        assert!(tx
            .set_input_supplement(
                0,
                InputSupplement {
                    satoshis: Some(1000),
                    key_id: None,
                },
            )
            .is_ok());
        assert!(tx.set_input_supplement(1, InputSupplement::default()).is_err());
    }

    #[test]
    fn fee_accounting() {
        let mut tx = Tx::new();
        tx.add_input(TxIn::default());
        tx.add_input(TxIn::default());
        tx.add_output(TxOut {
            satoshis: 1500,
            lock_script: Script::new(),
        });
        // No supplement values yet
        assert!(matches!(tx.fee(), Err(Error::MissingSupplement(_))));
        tx.set_input_supplement(
            0,
            InputSupplement {
                satoshis: Some(1000),
                key_id: None,
            },
        )
        .unwrap();
        tx.set_input_supplement(
            1,
            InputSupplement {
                satoshis: Some(1000),
                key_id: Some("k1".to_string()),
            },
        )
        .unwrap();
        assert_eq!(tx.fee().unwrap(), 500);
        // fee + sum(outputs) == sum(supplement values)
        let total_out: u64 = tx.outputs().iter().map(|o| o.satoshis).sum();
        assert_eq!(tx.fee().unwrap() + total_out as i64, 2000);
    }

    #[test]
    fn spend_amount_accounting() {
        let mut tx = Tx::new();
        tx.add_input(TxIn::default());
        tx.add_input(TxIn::default());
        tx.add_output(TxOut {
            satoshis: 700,
            lock_script: Script::new(),
        });
        tx.add_output(TxOut {
            satoshis: 200,
            lock_script: Script::new(),
        });
        tx.set_input_supplement(
            0,
            InputSupplement {
                satoshis: Some(1000),
                key_id: Some("k1".to_string()),
            },
        )
        .unwrap();
        // Second input is someone else's; value unknown is fine
        tx.set_input_supplement(1, InputSupplement::default()).unwrap();
        // Second output is change back to us
        tx.set_output_supplement(
            1,
            OutputSupplement {
                key_id: Some("k1".to_string()),
            },
        )
        .unwrap();
        assert_eq!(tx.spend_amount().unwrap(), 800);
    }

    #[test]
    fn spend_amount_owned_input_needs_value() {
        let mut tx = Tx::new();
        tx.add_input(TxIn::default());
        tx.set_input_supplement(
            0,
            InputSupplement {
                satoshis: None,
                key_id: Some("k1".to_string()),
            },
        )
        .unwrap();
        assert!(matches!(
            tx.spend_amount(),
            Err(Error::MissingSupplement(_))
        ));
    }

    #[test]
    fn midstate_cache_invalidation() {
        let mut tx = Tx::new();
        tx.add_input(TxIn::default());
        tx.add_output(TxOut {
            satoshis: 1000,
            lock_script: Script(vec![1, 2, 3]),
        });
        let before = tx.outputs_hash().unwrap();
        assert_eq!(tx.outputs_hash().unwrap(), before);
        tx.set_output_satoshis(0, 2000).unwrap();
        let after = tx.outputs_hash().unwrap();
        assert_ne!(before, after);
        // Matches a freshly built transaction with the same state
        let mut fresh = Tx::new();
        fresh.add_input(TxIn::default());
        fresh.add_output(TxOut {
            satoshis: 2000,
            lock_script: Script(vec![1, 2, 3]),
        });
        assert_eq!(fresh.outputs_hash().unwrap(), after);
        // Sequence mutation drops only the sequences midstate
        let prevouts = tx.prevouts_hash().unwrap();
        tx.set_sequence(0, 5).unwrap();
        assert_eq!(tx.prevouts_hash().unwrap(), prevouts);
        tx.clear_sig_hashes();
        assert_eq!(tx.prevouts_hash().unwrap(), prevouts);
        // Lock script edits are covered by the outputs midstate too
        tx.set_output_lock_script(0, Script(vec![4, 5, 6])).unwrap();
        assert_ne!(tx.outputs_hash().unwrap(), after);
    }

    #[test]
    fn equality_ignores_supplements() {
        let mut a = Tx::new();
        a.add_input(TxIn::default());
        let mut b = a.clone();
        b.set_input_supplement(
            0,
            InputSupplement {
                satoshis: Some(42),
                key_id: None,
            },
        )
        .unwrap();
        assert_eq!(a, b);
    }
}
