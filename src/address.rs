//! P2PKH address encoding/decoding in base58check format.
//!
//! Checksum is the first four bytes of a double-SHA256 over version plus
//! payload. Payload must be exactly 20 bytes (Hash160).

use crate::util::{sha256d, Error, Hash160, Result};
use base58::{FromBase58, ToBase58};

/// Network a key or address belongs to.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Network {
    /// Production network
    Mainnet,
    /// Test network
    Testnet,
}

const MAINNET_P2PKH_VERSION: u8 = 0x00;
const TESTNET_P2PKH_VERSION: u8 = 0x6f;

/// Encodes a base58check address from version byte and 20-byte payload.
///
/// # Errors
/// Returns `Error::BadArgument` if payload is not exactly 20 bytes.
pub fn encode_address(version: u8, payload: &[u8]) -> Result<String> {
    if payload.len() != 20 {
        return Err(Error::BadArgument("Payload must be 20 bytes".to_string()));
    }
    let mut v = [0u8; 25];
    v[0] = version;
    v[1..21].copy_from_slice(payload);
    let checksum = sha256d(&v[..21]);
    v[21..25].copy_from_slice(&checksum.0[..4]);
    Ok(v.to_base58())
}

/// Decodes a base58check address into version and payload.
///
/// # Errors
/// Returns `Error::FromBase58Error` on decode failure, `Error::BadData` on
/// invalid length or checksum.
pub fn decode_address(input: &str) -> Result<(u8, Vec<u8>)> {
    let bytes = input.from_base58()?;
    if bytes.len() != 25 {
        return Err(Error::BadData("Invalid address length".to_string()));
    }
    let checksum = sha256d(&bytes[..21]);
    if checksum.0[..4] != bytes[21..] {
        return Err(Error::BadData("Invalid checksum".to_string()));
    }
    let version = bytes[0];
    let payload = bytes[1..21].to_vec();
    Ok((version, payload))
}

/// Encodes a P2PKH address from a 20-byte pubkey hash.
///
/// # Errors
/// See [`encode_address`].
pub fn encode_p2pkh_address(network: Network, pubkey_hash: &Hash160) -> Result<String> {
    let version = match network {
        Network::Mainnet => MAINNET_P2PKH_VERSION,
        Network::Testnet => TESTNET_P2PKH_VERSION,
    };
    encode_address(version, &pubkey_hash.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn encode_zero_hash() {
        let addr = encode_p2pkh_address(Network::Mainnet, &Hash160([0; 20])).unwrap();
        assert_eq!(addr, "1111111111111111111114oLvT2");
    }

    #[test]
    fn decode_round_trip() {
        let addr = encode_p2pkh_address(Network::Testnet, &Hash160([7; 20])).unwrap();
        let (version, payload) = decode_address(&addr).unwrap();
        assert_eq!(version, 0x6f);
        assert_eq!(payload, vec![7; 20]);
    }

    #[test]
    fn decode_rejects() {
        assert!(decode_address("0OIl").is_err());
        // Corrupted checksum
        assert!(decode_address("1111111111111111111114oLvT3").is_err());
        assert!(decode_address("1A1zP1").is_err());
    }
}
