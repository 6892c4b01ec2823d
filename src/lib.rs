#![deny(missing_docs)]
#![deny(unsafe_code)]

/*! # Quill

The Bitcoin transaction signing core of a token protocol agent on Bitcoin
SV. Constructs, serializes, and signs transactions with the post-fork
sighash algorithm (BIP-143 style, FORKID), producing byte-exact artifacts
that consensus nodes accept.

## Usage
```
use quill::transaction::Tx;

let tx = Tx::from_hex("01000000000000000000").unwrap();
assert_eq!(tx.version(), 1);
assert_eq!(
    tx.hash().encode(),
    "d21633ba23f70118185227be58a63527675641ad37967e2aa461559f577aec43"
);
```

## Scope
The core signs what it is handed: coin selection, fee policy, UTXO
tracking, and network broadcast belong to the surrounding agent. ECDSA is
deterministic (RFC 6979) with low-S signatures, and sighash midstates are
cached per transaction so multi-input signing stays linear.
*/

pub mod address;
pub mod keys;
pub mod script;
pub mod transaction;
pub mod util;
