use crate::bech32::{self, Variant};
use crate::convert;
use crate::error::{DecoderError, Result};
use crate::keys::{self, PrivateKey, PublicKey};
use ripemd::Ripemd160;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use sha3::Keccak256;

/// Human-readable prefix for cash-style addresses
pub const CASH_ADDRESS_HRP: &str = "bitcoincash";

/// Version byte for pay-to-pubkey-hash payloads
pub const P2PKH_VERSION: u8 = 0x00;

/// RIPEMD160(SHA256(data)), the classic public key hash
pub fn hash160(data: &[u8]) -> [u8; 20] {
    Ripemd160::digest(Sha256::digest(data)).into()
}

/// Keccak-256 digest
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    Keccak256::digest(data).into()
}

/// Cash-style address: version byte plus hash160 of the compressed key,
/// regrouped to 5-bit symbols and bech32-encoded
pub fn cash_address(public_key: &PublicKey) -> Result<String> {
    let mut payload = vec![P2PKH_VERSION];
    payload.extend_from_slice(&hash160(&public_key.compressed()));
    bech32::encode(
        CASH_ADDRESS_HRP,
        &convert::bytes_to_words(&payload)?,
        Variant::Bech32,
    )
}

/// Ethereum address: last 20 bytes of Keccak-256 over the uncompressed
/// point (tag byte stripped), rendered with the EIP-55 mixed-case
/// checksum
pub fn eth_address(public_key: &PublicKey) -> String {
    let uncompressed = public_key.uncompressed();
    let hash = keccak256(&uncompressed[1..]);
    format!("0x{}", eip55_checksum(&hex::encode(&hash[12..])))
}

/// Apply the EIP-55 capitalization rule to a lowercase hex address:
/// a hex digit is uppercased when the matching nibble of the Keccak-256
/// of the address text is 8 or above
fn eip55_checksum(address: &str) -> String {
    let hash = keccak256(address.as_bytes());
    address
        .chars()
        .enumerate()
        .map(|(i, c)| {
            let nibble = if i % 2 == 0 {
                hash[i / 2] >> 4
            } else {
                hash[i / 2] & 0x0f
            };
            if nibble >= 8 {
                c.to_ascii_uppercase()
            } else {
                c
            }
        })
        .collect()
}

/// Everything derivable from a single Nostr key
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DerivedAddresses {
    pub npub: String,
    pub public_key: String,
    pub public_key_hash: String,
    pub cash_address: String,
    pub eth_address: String,
}

impl DerivedAddresses {
    /// Derive every address form from a public key
    pub fn from_public_key(public_key: &PublicKey) -> Result<Self> {
        Ok(Self {
            npub: public_key.to_npub()?,
            public_key: public_key.to_hex(),
            public_key_hash: hex::encode(hash160(&public_key.compressed())),
            cash_address: cash_address(public_key)?,
            eth_address: eth_address(public_key),
        })
    }

    /// Derive every address form from a private key
    pub fn from_private_key(private_key: &PrivateKey) -> Result<Self> {
        Self::from_public_key(&private_key.public_key())
    }
}

impl std::fmt::Display for DerivedAddresses {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Public Key (npub):   {}", self.npub)?;
        writeln!(f, "Public Key (hex):    {}", self.public_key)?;
        writeln!(f, "Public Key Hash:     {}", self.public_key_hash)?;
        writeln!(f, "Cash Address:        {}", self.cash_address)?;
        write!(f, "Ethereum Address:    {}", self.eth_address)
    }
}

/// Derive addresses from either an `nsec` or an `npub` string
pub fn derive_from_key_string(key: &str) -> Result<DerivedAddresses> {
    let decoded = bech32::decode(key)?;
    match decoded.hrp.as_str() {
        keys::PRIVATE_KEY_HRP => {
            DerivedAddresses::from_private_key(&PrivateKey::from_nsec(key)?)
        }
        keys::PUBLIC_KEY_HRP => DerivedAddresses::from_public_key(&PublicKey::from_npub(key)?),
        _ => Err(DecoderError::UnexpectedHrp {
            expected: format!("{} or {}", keys::PRIVATE_KEY_HRP, keys::PUBLIC_KEY_HRP),
            actual: decoded.hrp,
        }),
    }
}
