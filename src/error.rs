use thiserror::Error;

/// Result type for decoder operations
pub type Result<T> = std::result::Result<T, DecoderError>;

/// Error types for bech32 decoding and address derivation
#[derive(Error, Debug)]
pub enum DecoderError {
    /// Structural violation in a bech32 string: case mixing, bad or
    /// missing separator, length out of bounds
    #[error("Malformed bech32 string: {0}")]
    MalformedInput(String),

    /// Character outside the bech32 alphabet
    #[error("Invalid bech32 character: {0:?}")]
    InvalidCharacter(char),

    /// Structure is valid but the checksum matches neither variant
    #[error("Bech32 checksum mismatch")]
    ChecksumMismatch,

    /// Bit regrouping fed a value wider than the declared source width
    #[error("Value {value} does not fit in {width} bits")]
    ValueOutOfRange { value: u32, width: u32 },

    /// Bit regrouping without padding left an incomplete or non-zero group
    #[error("Invalid bit padding: {0}")]
    InvalidPadding(String),

    /// A key string carried the wrong human-readable prefix
    #[error("Unexpected prefix: expected {expected:?}, got {actual:?}")]
    UnexpectedHrp { expected: String, actual: String },

    /// Invalid key length
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    /// Cryptographic error
    #[error("Cryptographic error: {0}")]
    CryptoError(String),

    /// Hex decoding error
    #[error("Hex decode error: {0}")]
    HexError(#[from] hex::FromHexError),
}

impl From<secp256k1::Error> for DecoderError {
    fn from(err: secp256k1::Error) -> Self {
        DecoderError::CryptoError(err.to_string())
    }
}
