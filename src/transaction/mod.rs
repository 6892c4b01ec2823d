//! Transaction building and signing for Bitcoin SV.
//!
//! Supports the post-fork sighash algorithm (BIP-143 style with FORKID),
//! P2PKH unlock script assembly, detached signatures for multi-sig
//! workflows, and fee/spend accounting from off-wire supplements.
//!
//! # Examples
//!
//! Sign a P2PKH input:
//! ```
//! use quill::keys::PrivateKey;
//! use quill::transaction::p2pkh::create_lock_script;
//! use quill::transaction::sighash::{SigHashValue, DEFAULT_SIGHASH_TYPE};
//! use quill::transaction::{OutPoint, Tx, TxIn, TxOut};
//! use quill::util::Hash256;
//!
//! let key = PrivateKey::from_bytes(&[1; 32]).unwrap();
//! let lock_script = create_lock_script(&key.public_key().hash160());
//! let mut tx = Tx::new();
//! tx.add_input(TxIn::new(OutPoint { hash: Hash256([7; 32]), index: 0 }));
//! tx.add_output(TxOut { satoshis: 900, lock_script: lock_script.clone() });
//! tx.sign_p2pkh_input(
//!     &key,
//!     0,
//!     &lock_script.0,
//!     SigHashValue::Satoshis(1000),
//!     DEFAULT_SIGHASH_TYPE,
//! )
//! .unwrap();
//! assert!(!tx.inputs()[0].unlock_script.0.is_empty());
//! ```

mod out_point;
pub mod p2pkh;
pub mod sighash;
mod signing;
mod tx;
mod tx_in;
mod tx_out;

pub use self::out_point::OutPoint;
pub use self::signing::{PendingSignature, SignMode, SignOutcome};
pub use self::tx::{InputSupplement, OutputSupplement, RawTx, Tx};
pub use self::tx_in::{TxIn, DEFAULT_SEQUENCE};
pub use self::tx_out::{TxOut, MAX_SATOSHIS};
