use crate::bech32::{self, Variant};
use crate::convert;
use crate::error::{DecoderError, Result};
use secp256k1::{Parity, Secp256k1, SecretKey, XOnlyPublicKey};
use zeroize::ZeroizeOnDrop;

/// Human-readable prefix for encoded private keys
pub const PRIVATE_KEY_HRP: &str = "nsec";

/// Human-readable prefix for encoded public keys
pub const PUBLIC_KEY_HRP: &str = "npub";

const KEY_LENGTH: usize = 32;

/// A secp256k1 private key recovered from an `nsec` string
#[derive(Clone, ZeroizeOnDrop)]
pub struct PrivateKey {
    bytes: [u8; KEY_LENGTH],
}

impl PrivateKey {
    /// Create a private key from raw bytes, validating the scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LENGTH {
            return Err(DecoderError::InvalidKeyLength {
                expected: KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        // Rejects zero and values past the curve order
        SecretKey::from_slice(bytes)?;
        let mut array = [0u8; KEY_LENGTH];
        array.copy_from_slice(bytes);
        Ok(Self { bytes: array })
    }

    /// Create a private key from a hex string
    pub fn from_hex(hex_str: &str) -> Result<Self> {
        let bytes = hex::decode(hex_str)?;
        Self::from_bytes(&bytes)
    }

    /// Decode an `nsec` bech32 string into a private key
    pub fn from_nsec(nsec: &str) -> Result<Self> {
        let decoded = bech32::decode(nsec)?;
        if decoded.hrp != PRIVATE_KEY_HRP {
            return Err(DecoderError::UnexpectedHrp {
                expected: PRIVATE_KEY_HRP.to_string(),
                actual: decoded.hrp,
            });
        }
        let bytes = convert::words_to_bytes(&decoded.data)?;
        Self::from_bytes(&bytes)
    }

    /// Re-encode as an `nsec` bech32 string
    pub fn to_nsec(&self) -> Result<String> {
        bech32::encode(
            PRIVATE_KEY_HRP,
            &convert::bytes_to_words(&self.bytes)?,
            Variant::Bech32,
        )
    }

    /// Get the private key as bytes
    pub fn as_bytes(&self) -> &[u8; KEY_LENGTH] {
        &self.bytes
    }

    /// Convert to hex string
    pub fn to_hex(&self) -> String {
        hex::encode(self.bytes)
    }

    /// Derive the corresponding public key
    pub fn public_key(&self) -> PublicKey {
        let secp = Secp256k1::new();
        // Scalar range was checked at construction
        let secret = SecretKey::from_slice(&self.bytes).expect("scalar validated at construction");
        PublicKey {
            inner: secp256k1::PublicKey::from_secret_key(&secp, &secret),
        }
    }
}

impl std::fmt::Debug for PrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "PrivateKey([REDACTED])")
    }
}

/// A secp256k1 public key recovered from an `npub` string or derived
/// from a private key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PublicKey {
    inner: secp256k1::PublicKey,
}

impl PublicKey {
    /// Create a public key from 33-byte SEC1 compressed bytes
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() != KEY_LENGTH + 1 {
            return Err(DecoderError::InvalidKeyLength {
                expected: KEY_LENGTH + 1,
                actual: bytes.len(),
            });
        }
        Ok(Self {
            inner: secp256k1::PublicKey::from_slice(bytes)?,
        })
    }

    /// Decode an `npub` bech32 string. The payload is a 32-byte x-only
    /// key; the point is lifted with even parity.
    pub fn from_npub(npub: &str) -> Result<Self> {
        let decoded = bech32::decode(npub)?;
        if decoded.hrp != PUBLIC_KEY_HRP {
            return Err(DecoderError::UnexpectedHrp {
                expected: PUBLIC_KEY_HRP.to_string(),
                actual: decoded.hrp,
            });
        }
        let bytes = convert::words_to_bytes(&decoded.data)?;
        if bytes.len() != KEY_LENGTH {
            return Err(DecoderError::InvalidKeyLength {
                expected: KEY_LENGTH,
                actual: bytes.len(),
            });
        }
        let x_only = XOnlyPublicKey::from_slice(&bytes)?;
        Ok(Self {
            inner: secp256k1::PublicKey::from_x_only_public_key(x_only, Parity::Even),
        })
    }

    /// Encode the x coordinate as an `npub` bech32 string
    pub fn to_npub(&self) -> Result<String> {
        bech32::encode(
            PUBLIC_KEY_HRP,
            &convert::bytes_to_words(&self.x_only())?,
            Variant::Bech32,
        )
    }

    /// 33-byte SEC1 compressed encoding
    pub fn compressed(&self) -> [u8; 33] {
        self.inner.serialize()
    }

    /// 65-byte SEC1 uncompressed encoding
    pub fn uncompressed(&self) -> [u8; 65] {
        self.inner.serialize_uncompressed()
    }

    /// 32-byte x-only encoding
    pub fn x_only(&self) -> [u8; 32] {
        self.inner.x_only_public_key().0.serialize()
    }

    /// Compressed encoding as hex
    pub fn to_hex(&self) -> String {
        hex::encode(self.compressed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // NIP-19 reference vectors; both describe the same keypair
    const NSEC: &str = "nsec1vl029mgpspedva04g90vltkh6fvh240zqtv9k0t9af8935ke9laqsnlfe5";
    const NPUB: &str = "npub10elfcs4fr0l0r8af98jlmgdh9c8tcxjvz9qkw038js35mp4dma8qzvjptg";
    const PRIVATE_HEX: &str = "67dea2ed018072d675f5415ecfaed7d2597555e202d85b3d65ea4e58d2d92ffa";
    const PUBLIC_X_HEX: &str = "7e7e9c42a91bfef19fa929e5fda1b72e0ebc1a4c1141673e2794234d86addf4e";

    #[test]
    fn test_nsec_decodes_to_known_scalar() {
        let key = PrivateKey::from_nsec(NSEC).unwrap();
        assert_eq!(key.to_hex(), PRIVATE_HEX);
    }

    #[test]
    fn test_nsec_roundtrip() {
        let key = PrivateKey::from_nsec(NSEC).unwrap();
        assert_eq!(key.to_nsec().unwrap(), NSEC);
    }

    #[test]
    fn test_private_key_from_hex() {
        let key = PrivateKey::from_hex(PRIVATE_HEX).unwrap();
        assert_eq!(key.as_bytes(), PrivateKey::from_nsec(NSEC).unwrap().as_bytes());
    }

    #[test]
    fn test_npub_decodes_to_known_point() {
        let key = PublicKey::from_npub(NPUB).unwrap();
        assert_eq!(hex::encode(key.x_only()), PUBLIC_X_HEX);
        assert_eq!(key.compressed()[0], 0x02);
    }

    #[test]
    fn test_npub_roundtrip() {
        let key = PublicKey::from_npub(NPUB).unwrap();
        assert_eq!(key.to_npub().unwrap(), NPUB);
    }

    #[test]
    fn test_public_key_derivation_matches_npub() {
        let derived = PrivateKey::from_nsec(NSEC).unwrap().public_key();
        assert_eq!(derived, PublicKey::from_npub(NPUB).unwrap());
        assert_eq!(derived.to_npub().unwrap(), NPUB);
    }

    #[test]
    fn test_wrong_prefix_rejected() {
        assert!(matches!(
            PrivateKey::from_nsec(NPUB),
            Err(DecoderError::UnexpectedHrp { .. })
        ));
        assert!(matches!(
            PublicKey::from_npub(NSEC),
            Err(DecoderError::UnexpectedHrp { .. })
        ));
    }

    #[test]
    fn test_invalid_scalar_rejected() {
        assert!(PrivateKey::from_bytes(&[0u8; 32]).is_err());
        assert!(matches!(
            PrivateKey::from_bytes(&[1u8; 16]),
            Err(DecoderError::InvalidKeyLength { expected: 32, actual: 16 })
        ));
    }

    #[test]
    fn test_compressed_roundtrip() {
        let key = PublicKey::from_npub(NPUB).unwrap();
        let recovered = PublicKey::from_bytes(&key.compressed()).unwrap();
        assert_eq!(key, recovered);
    }

    #[test]
    fn test_debug_redacts_private_key() {
        let key = PrivateKey::from_nsec(NSEC).unwrap();
        assert_eq!(format!("{key:?}"), "PrivateKey([REDACTED])");
    }
}
