//! Script opcodes the signing core emits or recognizes.
//!
//! Only the push-data family and the P2PKH template opcodes are needed;
//! the core never evaluates scripts.

// Pushdata and Constants
/// Pushes empty array (0/false) onto the stack.
pub const OP_0: u8 = 0;
/// Base for direct pushes of n bytes (n: 1-75).
pub const OP_PUSH: u8 = 0;
/// Next byte is push length (up to 255 bytes).
pub const OP_PUSHDATA1: u8 = 76;
/// Next two bytes are push length (up to 65535 bytes).
pub const OP_PUSHDATA2: u8 = 77;
/// Next four bytes are push length (up to 4GB).
pub const OP_PUSHDATA4: u8 = 78;

// Splice
/// Marks an unspendable data-carrier output.
pub const OP_RETURN: u8 = 106;

// Stack
/// Duplicates the top stack item.
pub const OP_DUP: u8 = 118;

// Bitwise logic
/// Pops two items, fails the script unless equal.
pub const OP_EQUALVERIFY: u8 = 136;

// Crypto
/// Pops an item, pushes its Hash160.
pub const OP_HASH160: u8 = 169;
/// Verifies an ECDSA signature against a public key.
pub const OP_CHECKSIG: u8 = 172;
