//! ECDSA key material on secp256k1 for transaction signing.
//!
//! Signing is deterministic (RFC 6979) and produces low-S DER signatures,
//! as required for network acceptance. Public keys are always compressed.

use crate::util::{hash160, sha256d, Error, Hash160, Hash256, Result};
use base58::FromBase58;
use secp256k1::{ecdsa, Message, PublicKey as SecpPublicKey, Secp256k1, SecretKey};
use std::fmt;

/// Mainnet WIF version byte.
const MAINNET_WIF_VERSION: u8 = 0x80;
/// Testnet WIF version byte.
const TESTNET_WIF_VERSION: u8 = 0xef;
/// Flag byte a WIF carries when the key maps to a compressed public key.
const WIF_COMPRESSED_FLAG: u8 = 0x01;

/// A secp256k1 private key.
#[derive(Clone)]
pub struct PrivateKey {
    secret: SecretKey,
}

impl PrivateKey {
    /// Creates a private key from a raw 32-byte scalar.
    ///
    /// # Errors
    /// `Error::Secp256k1Error` if the scalar is zero or out of range.
    pub fn from_bytes(bytes: &[u8; 32]) -> Result<PrivateKey> {
        let secret = SecretKey::from_slice(bytes)?;
        Ok(PrivateKey { secret })
    }

    /// Creates a private key from a 64-character hex string.
    ///
    /// # Errors
    /// Hex or scalar errors propagate.
    pub fn from_hex(s: &str) -> Result<PrivateKey> {
        let decoded = hex::decode(s)?;
        let bytes: [u8; 32] = decoded
            .try_into()
            .map_err(|_| Error::BadArgument("Private key must be 32 bytes".to_string()))?;
        Self::from_bytes(&bytes)
    }

    /// Creates a private key from a base58check WIF string.
    ///
    /// Accepts mainnet and testnet version bytes, with or without the
    /// compressed-key flag.
    ///
    /// # Errors
    /// `Error::BadData` on bad length, version, or checksum.
    pub fn from_wif(wif: &str) -> Result<PrivateKey> {
        let bytes = wif.from_base58()?;
        let payload_len = match bytes.len() {
            37 => 33,
            38 => {
                if bytes[33] != WIF_COMPRESSED_FLAG {
                    return Err(Error::BadData("Invalid WIF compression flag".to_string()));
                }
                34
            }
            n => return Err(Error::BadData(format!("Invalid WIF length: {}", n))),
        };
        if bytes[0] != MAINNET_WIF_VERSION && bytes[0] != TESTNET_WIF_VERSION {
            return Err(Error::BadData(format!("Invalid WIF version: {}", bytes[0])));
        }
        let checksum = sha256d(&bytes[..payload_len]);
        if checksum.0[..4] != bytes[payload_len..] {
            return Err(Error::BadData("Invalid WIF checksum".to_string()));
        }
        let mut key = [0u8; 32];
        key.copy_from_slice(&bytes[1..33]);
        Self::from_bytes(&key)
    }

    /// Generates a new random private key.
    #[must_use]
    pub fn generate() -> PrivateKey {
        let secret = SecretKey::new(&mut rand::thread_rng());
        PrivateKey { secret }
    }

    /// Signs a 32-byte digest, returning a deterministic low-S signature.
    #[must_use]
    pub fn sign(&self, digest: &Hash256) -> Signature {
        let secp = Secp256k1::signing_only();
        let message = Message::from_digest(digest.0);
        let mut signature = secp.sign_ecdsa(&message, &self.secret);
        signature.normalize_s();
        Signature(signature)
    }

    /// Returns the corresponding public key.
    #[must_use]
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::signing_only();
        PublicKey(SecpPublicKey::from_secret_key(&secp, &self.secret))
    }
}

impl fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        // Never print key material
        write!(f, "PrivateKey(...)")
    }
}

/// A secp256k1 public key, serialized compressed.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct PublicKey(SecpPublicKey);

impl PublicKey {
    /// Parses a public key from SEC1 bytes, compressed or uncompressed.
    ///
    /// # Errors
    /// `Error::Secp256k1Error` if the bytes are not a valid curve point.
    pub fn from_slice(bytes: &[u8]) -> Result<PublicKey> {
        Ok(PublicKey(SecpPublicKey::from_slice(bytes)?))
    }

    /// Returns the compressed SEC1 encoding (33 bytes).
    #[must_use]
    #[inline]
    pub fn to_bytes(&self) -> [u8; 33] {
        self.0.serialize()
    }

    /// Returns the Hash160 of the compressed encoding.
    #[must_use]
    #[inline]
    pub fn hash160(&self) -> Hash160 {
        hash160(&self.to_bytes())
    }
}

/// A DER-encodable ECDSA signature.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Signature(pub(crate) ecdsa::Signature);

impl Signature {
    /// Returns the DER encoding.
    #[must_use]
    #[inline]
    pub fn to_der(&self) -> Vec<u8> {
        self.0.serialize_der().to_vec()
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", hex::encode(self.to_der()))
    }
}
