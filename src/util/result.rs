//! Standard error and result types for the library.
use base58::FromBase58Error;
use hex::FromHexError;
use secp256k1::Error as Secp256k1Error;
use std::io;

/// Standard error type used in the library
#[derive(Debug)]
pub enum Error {
    /// A supplement list does not line up with its inputs or outputs
    Alignment(String),
    /// An argument provided is invalid
    BadArgument(String),
    /// The data given is not valid
    BadData(String),
    /// Serialized data could not be decoded
    Deserialize(String),
    /// Base58 string could not be decoded
    FromBase58Error(FromBase58Error),
    /// Hex string could not be decoded
    FromHexError(FromHexError),
    /// An input or output index is out of range
    IndexOutOfRange(String),
    /// Standard library IO error
    IOError(io::Error),
    /// Accounting was requested without the needed supplement
    MissingSupplement(String),
    /// Error in the Secp256k1 library
    Secp256k1Error(Secp256k1Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Alignment(s) => write!(f, "Supplement misaligned: {}", s),
            Error::BadArgument(s) => write!(f, "Bad argument: {}", s),
            Error::BadData(s) => write!(f, "Bad data: {}", s),
            Error::Deserialize(s) => write!(f, "Deserialize error: {}", s),
            Error::FromBase58Error(e) => write!(f, "Base58 decoding error: {:?}", e),
            Error::FromHexError(e) => write!(f, "Hex decoding error: {}", e),
            Error::IndexOutOfRange(s) => write!(f, "Index out of range: {}", s),
            Error::IOError(e) => write!(f, "IO error: {}", e),
            Error::MissingSupplement(s) => write!(f, "Missing supplement: {}", s),
            Error::Secp256k1Error(e) => write!(f, "Secp256k1 error: {}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FromHexError(e) => Some(e),
            Error::IOError(e) => Some(e),
            Error::Secp256k1Error(e) => Some(e),
            _ => None,
        }
    }
}

impl From<FromBase58Error> for Error {
    fn from(e: FromBase58Error) -> Self {
        Error::FromBase58Error(e)
    }
}

impl From<FromHexError> for Error {
    fn from(e: FromHexError) -> Self {
        Error::FromHexError(e)
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::IOError(e)
    }
}

impl From<Secp256k1Error> for Error {
    fn from(e: Secp256k1Error) -> Self {
        Error::Secp256k1Error(e)
    }
}

/// Standard Result used in the library
pub type Result<T> = std::result::Result<T, Error>;
