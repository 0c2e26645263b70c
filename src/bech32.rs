//! Bech32 and bech32m string codec.
//!
//! Encodes 5-bit symbol payloads under a human-readable prefix with a
//! 30-bit BCH checksum, and decodes such strings back with full
//! validation. The two checksum variants are incompatible generations of
//! the same format and are discriminated at decode time.

use crate::error::{DecoderError, Result};
use once_cell::sync::Lazy;

/// The 32-character encoding alphabet. Excludes the visually ambiguous
/// `1`, `b`, `i` and `o`.
pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

/// Separator between the human-readable prefix and the data part
pub const SEPARATOR: char = '1';

/// Maximum total length of an encoded string
pub const MAX_LENGTH: usize = 90;

/// Number of checksum symbols appended to the data part
pub const CHECKSUM_LENGTH: usize = 6;

/// Generator coefficients of the BCH code over GF(32)
const GENERATOR: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

// Reverse lookup from ASCII byte to symbol value, -1 for bytes outside
// the alphabet
static CHARSET_REV: Lazy<[i8; 128]> = Lazy::new(|| {
    let mut table = [-1i8; 128];
    for (i, c) in CHARSET.bytes().enumerate() {
        table[c as usize] = i as i8;
    }
    table
});

/// Which checksum constant an encoded string was produced with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Original checksum constant (1)
    Bech32,
    /// Updated checksum constant (0x2bc830a3)
    Bech32m,
}

impl Variant {
    /// Constant XORed into the polymod value when creating a checksum
    const fn checksum_const(self) -> u32 {
        match self {
            Variant::Bech32 => 1,
            Variant::Bech32m => 0x2bc8_30a3,
        }
    }

    /// Map a checksum residue back to the variant that produced it
    fn from_residue(residue: u32) -> Option<Self> {
        match residue {
            1 => Some(Variant::Bech32),
            0x2bc8_30a3 => Some(Variant::Bech32m),
            _ => None,
        }
    }
}

impl std::fmt::Display for Variant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Variant::Bech32 => write!(f, "bech32"),
            Variant::Bech32m => write!(f, "bech32m"),
        }
    }
}

/// Outcome of a successful decode
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    /// Human-readable prefix, lowercased
    pub hrp: String,
    /// Payload as 5-bit symbols, checksum stripped
    pub data: Vec<u8>,
    /// Which checksum variant verified
    pub variant: Variant,
}

/// Look up the symbol value for an alphabet character
pub fn charset_index(c: char) -> Result<u8> {
    let index = u32::from(c)
        .try_into()
        .ok()
        .and_then(|b: usize| CHARSET_REV.get(b).copied())
        .unwrap_or(-1);
    if index < 0 {
        return Err(DecoderError::InvalidCharacter(c));
    }
    Ok(index as u8)
}

/// Look up the alphabet character for a symbol value
pub fn charset_char(symbol: u8) -> Result<char> {
    CHARSET
        .as_bytes()
        .get(symbol as usize)
        .map(|&b| b as char)
        .ok_or(DecoderError::ValueOutOfRange {
            value: u32::from(symbol),
            width: 5,
        })
}

/// The BCH polymod over a symbol sequence, producing the 30-bit residue
fn polymod(values: &[u8]) -> u32 {
    let mut chk: u32 = 1;
    for &value in values {
        let top = chk >> 25;
        chk = (chk & 0x1ff_ffff) << 5 ^ u32::from(value);
        for (i, generator) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// Expand the prefix into the symbol sequence covered by the checksum:
/// high bits of each character, a zero, then the low bits
fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut expanded = Vec::with_capacity(bytes.len() * 2 + 1);
    expanded.extend(bytes.iter().map(|b| b >> 5));
    expanded.push(0);
    expanded.extend(bytes.iter().map(|b| b & 31));
    expanded
}

/// Compute the six checksum symbols for a prefix and data payload
fn create_checksum(hrp: &str, data: &[u8], variant: Variant) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let residue = polymod(&values) ^ variant.checksum_const();
    let mut checksum = [0u8; CHECKSUM_LENGTH];
    for (i, symbol) in checksum.iter_mut().enumerate() {
        *symbol = ((residue >> (5 * (5 - i))) & 31) as u8;
    }
    checksum
}

/// Check the checksum over prefix plus data-with-checksum, reporting
/// which variant it verifies under
fn verify_checksum(hrp: &str, data: &[u8]) -> Option<Variant> {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    Variant::from_residue(polymod(&values))
}

fn validate_hrp(hrp: &str) -> Result<()> {
    if hrp.is_empty() {
        return Err(DecoderError::MalformedInput(
            "empty human-readable prefix".to_string(),
        ));
    }
    for c in hrp.chars() {
        if !('\x21'..='\x7e').contains(&c) {
            return Err(DecoderError::MalformedInput(format!(
                "prefix character {c:?} outside printable ASCII"
            )));
        }
    }
    let has_upper = hrp.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = hrp.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(DecoderError::MalformedInput(
            "mixed-case prefix".to_string(),
        ));
    }
    Ok(())
}

/// Encode 5-bit data symbols under a prefix with the given checksum
/// variant. The prefix is validated against the same constraints decode
/// enforces and the result is always lowercase.
pub fn encode(hrp: &str, data: &[u8], variant: Variant) -> Result<String> {
    validate_hrp(hrp)?;
    for &symbol in data {
        if symbol >= 32 {
            return Err(DecoderError::ValueOutOfRange {
                value: u32::from(symbol),
                width: 5,
            });
        }
    }
    let total = hrp.len() + 1 + data.len() + CHECKSUM_LENGTH;
    if total > MAX_LENGTH {
        return Err(DecoderError::MalformedInput(format!(
            "encoded length {total} exceeds {MAX_LENGTH}"
        )));
    }

    let hrp = hrp.to_lowercase();
    let checksum = create_checksum(&hrp, data, variant);
    let mut encoded = String::with_capacity(total);
    encoded.push_str(&hrp);
    encoded.push(SEPARATOR);
    for &symbol in data.iter().chain(checksum.iter()) {
        encoded.push(charset_char(symbol)?);
    }
    Ok(encoded)
}

/// Decode a bech32/bech32m string into prefix, data symbols and variant.
///
/// Validation gates, in order: printable ASCII only, no case mixing,
/// total length, separator presence and position, alphabet membership
/// after the separator, checksum residue.
pub fn decode(encoded: &str) -> Result<Decoded> {
    for c in encoded.chars() {
        if !('\x21'..='\x7e').contains(&c) {
            return Err(DecoderError::MalformedInput(format!(
                "character {c:?} outside printable ASCII"
            )));
        }
    }
    let has_upper = encoded.chars().any(|c| c.is_ascii_uppercase());
    let has_lower = encoded.chars().any(|c| c.is_ascii_lowercase());
    if has_upper && has_lower {
        return Err(DecoderError::MalformedInput(
            "mixed-case string".to_string(),
        ));
    }
    if encoded.len() > MAX_LENGTH {
        return Err(DecoderError::MalformedInput(format!(
            "length {} exceeds {MAX_LENGTH}",
            encoded.len()
        )));
    }

    let encoded = encoded.to_lowercase();
    let pos = encoded.rfind(SEPARATOR).ok_or_else(|| {
        DecoderError::MalformedInput("missing separator".to_string())
    })?;
    if pos == 0 {
        return Err(DecoderError::MalformedInput(
            "empty human-readable prefix".to_string(),
        ));
    }
    if pos + 1 + CHECKSUM_LENGTH > encoded.len() {
        return Err(DecoderError::MalformedInput(
            "data part shorter than the checksum".to_string(),
        ));
    }

    let hrp = &encoded[..pos];
    let mut data = Vec::with_capacity(encoded.len() - pos - 1);
    for c in encoded[pos + 1..].chars() {
        data.push(charset_index(c)?);
    }

    let variant = verify_checksum(hrp, &data).ok_or(DecoderError::ChecksumMismatch)?;
    data.truncate(data.len() - CHECKSUM_LENGTH);
    Ok(Decoded {
        hrp: hrp.to_string(),
        data,
        variant,
    })
}
