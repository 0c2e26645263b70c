//! Decoder for Nostr NIP-19 bech32 keys with cross-chain address
//! derivation.
//!
//! The core is a self-contained bech32/bech32m codec ([`bech32`]) and a
//! strict bit regrouper ([`convert`]). On top of those, [`keys`] decodes
//! `nsec`/`npub` strings into secp256k1 keys and [`address`] derives
//! cash-style and Ethereum addresses from them.
//!
//! ```
//! use nostr_address_decoder::bech32::{self, Variant};
//!
//! let encoded = bech32::encode("test", &[], Variant::Bech32).unwrap();
//! assert_eq!(encoded, "test12hrzfj");
//!
//! let decoded = bech32::decode(&encoded).unwrap();
//! assert_eq!(decoded.hrp, "test");
//! assert_eq!(decoded.variant, Variant::Bech32);
//! ```

pub mod address;
pub mod bech32;
pub mod convert;
pub mod error;
pub mod keys;

pub use address::{cash_address, derive_from_key_string, eth_address, DerivedAddresses};
pub use bech32::{Decoded, Variant};
pub use error::{DecoderError, Result};
pub use keys::{PrivateKey, PublicKey};
