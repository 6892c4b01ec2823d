//! Pay-to-Public-Key-Hash (P2PKH) lock and unlock script templates.
///
/// The only script family the signing core emits. Lock scripts pay to a
/// Hash160 of a public key; unlock scripts push a signature and the key.
use crate::script::op_codes::{OP_CHECKSIG, OP_DUP, OP_EQUALVERIFY, OP_HASH160, OP_PUSH};
use crate::script::{next_op, Script};
use crate::util::{Error, Hash160, Result};

/// Creates P2PKH lock script (DUP HASH160 [hash] EQUALVERIFY CHECKSIG).
#[must_use]
#[inline]
pub fn create_lock_script(pubkey_hash: &Hash160) -> Script {
    let mut script = Script::new();
    script.append(OP_DUP);
    script.append(OP_HASH160);
    script.append(OP_PUSH + 20);
    script.append_slice(&pubkey_hash.0);
    script.append(OP_EQUALVERIFY);
    script.append(OP_CHECKSIG);
    script
}

/// Creates P2PKH unlock script (push sig + pubkey).
///
/// # Errors
/// Push encoding errors propagate.
#[inline]
pub fn create_unlock_script(sig: &[u8], public_key: &[u8]) -> Result<Script> {
    let mut script = Script::new();
    script.append_data(sig)?;
    script.append_data(public_key)?;
    Ok(script)
}

/// Checks if script is P2PKH lock (len=25, ops match).
#[must_use]
#[inline]
pub fn check_lock_script(lock_script: &[u8]) -> bool {
    lock_script.len() == 25
        && lock_script[0] == OP_DUP
        && lock_script[1] == OP_HASH160
        && lock_script[2] == OP_PUSH + 20
        && lock_script[23] == OP_EQUALVERIFY
        && lock_script[24] == OP_CHECKSIG
}

/// Checks if script is P2PKH unlock (sig push 71-73B + pubkey 33/65B).
#[must_use]
#[inline]
pub fn check_unlock_script(unlock_script: &[u8]) -> bool {
    if unlock_script.is_empty() {
        return false;
    }
    let sig_len = unlock_script[0];
    if sig_len < OP_PUSH + 71 || sig_len > OP_PUSH + 73 {
        return false;
    }
    let i = next_op(0, unlock_script);
    if i >= unlock_script.len() {
        return false;
    }
    let pk_len = unlock_script[i];
    if pk_len != OP_PUSH + 33 && pk_len != OP_PUSH + 65 {
        return false;
    }
    next_op(i, unlock_script) == unlock_script.len()
}

/// Extracts pubkey from P2PKH unlock.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH unlock.
pub fn extract_pubkey(unlock_script: &[u8]) -> Result<Vec<u8>> {
    if !check_unlock_script(unlock_script) {
        return Err(Error::BadData("Not P2PKH unlock".to_string()));
    }
    let i = next_op(0, unlock_script);
    Ok(unlock_script[i + 1..].to_vec())
}

/// Extracts hash160 from P2PKH lock.
///
/// # Errors
/// `Error::BadData` if the script is not a P2PKH lock.
pub fn extract_pubkey_hash(lock_script: &[u8]) -> Result<Hash160> {
    if !check_lock_script(lock_script) {
        return Err(Error::BadData("Not P2PKH lock".to_string()));
    }
    let mut pubkey_hash = Hash160([0; 20]);
    pubkey_hash.0.copy_from_slice(&lock_script[3..23]);
    Ok(pubkey_hash)
}
