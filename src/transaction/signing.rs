//! Signing services: embed a P2PKH unlock script or emit a detached
//! signature descriptor for remote script assembly.

use crate::keys::PrivateKey;
use crate::transaction::p2pkh;
use crate::transaction::sighash::SigHashValue;
use crate::transaction::tx::Tx;
use crate::util::Result;

/// How a produced signature should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignMode {
    /// Write the signature and public key into the input's unlock script.
    Embed,
    /// Return a descriptor and leave the transaction untouched, for callers
    /// that assemble multi-signature scripts remotely.
    Detach {
        /// Position of this signature within the script being assembled.
        signature_index: usize,
    },
}

/// Outcome of signing one input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignOutcome {
    /// The unlock script was written into the signed input.
    Embedded,
    /// Descriptor for remote assembly; the transaction is unchanged.
    Detached(PendingSignature),
}

/// A signature produced without mutating the transaction.
///
/// `signature` is the hex of the DER bytes alone; the sighash type travels
/// in `sig_hash_type` and is appended by whoever assembles the final
/// script. The embedded path instead appends the type byte to the DER
/// bytes inside the script push.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSignature {
    /// Index of the signed input.
    pub input_index: usize,
    /// Position of this signature within the script being assembled.
    pub signature_index: usize,
    /// Hex-encoded DER signature.
    pub signature: String,
    /// Sighash type the signature commits to.
    pub sig_hash_type: u8,
}

impl Tx {
    /// Signs one input, committing to the given locking script and value.
    ///
    /// The digest computation is shared by both modes; only the delivery
    /// differs. In `Embed` mode the input's unlock script is assigned only
    /// after signing succeeds, so a failed sign leaves the transaction
    /// unmodified.
    ///
    /// # Errors
    /// `Error::IndexOutOfRange` for a bad input index; script push errors
    /// propagate.
    pub fn sign_input(
        &mut self,
        private_key: &PrivateKey,
        n_input: usize,
        lock_script: &[u8],
        satoshis: SigHashValue,
        sighash_type: u8,
        mode: SignMode,
    ) -> Result<SignOutcome> {
        let digest = self.sighash(n_input, lock_script, satoshis, sighash_type)?;
        let signature = private_key.sign(&digest);
        match mode {
            SignMode::Embed => {
                let mut sig_with_type = signature.to_der();
                sig_with_type.push(sighash_type);
                let unlock = p2pkh::create_unlock_script(
                    &sig_with_type,
                    &private_key.public_key().to_bytes(),
                )?;
                self.set_unlock_script(n_input, unlock)?;
                Ok(SignOutcome::Embedded)
            }
            SignMode::Detach { signature_index } => {
                Ok(SignOutcome::Detached(PendingSignature {
                    input_index: n_input,
                    signature_index,
                    signature: signature.to_string(),
                    sig_hash_type: sighash_type,
                }))
            }
        }
    }

    /// Signs an input and embeds the P2PKH unlock script.
    ///
    /// # Errors
    /// See [`Tx::sign_input`].
    pub fn sign_p2pkh_input(
        &mut self,
        private_key: &PrivateKey,
        n_input: usize,
        lock_script: &[u8],
        satoshis: SigHashValue,
        sighash_type: u8,
    ) -> Result<()> {
        self.sign_input(
            private_key,
            n_input,
            lock_script,
            satoshis,
            sighash_type,
            SignMode::Embed,
        )?;
        Ok(())
    }

    /// Signs an input and returns the detached descriptor without touching
    /// the transaction.
    ///
    /// # Errors
    /// See [`Tx::sign_input`].
    pub fn pending_signature(
        &mut self,
        private_key: &PrivateKey,
        n_input: usize,
        signature_index: usize,
        lock_script: &[u8],
        satoshis: SigHashValue,
        sighash_type: u8,
    ) -> Result<PendingSignature> {
        match self.sign_input(
            private_key,
            n_input,
            lock_script,
            satoshis,
            sighash_type,
            SignMode::Detach { signature_index },
        )? {
            SignOutcome::Detached(pending) => Ok(pending),
            SignOutcome::Embedded => unreachable!("detach mode returns a descriptor"),
        }
    }
}
