//! Regrouping of fixed-width integer sequences between bit widths,
//! treating the input as one big-endian bitstream.

use crate::error::{DecoderError, Result};

/// Re-pack `data`, whose values each fit in `from_bits` bits, into values
/// of `to_bits` bits, most-significant bits first.
///
/// With `pad` set, leftover bits are emitted as a final zero-filled
/// group. Without it, leftover bits must be fewer than `from_bits` and
/// all zero, which is the final integrity gate on a decoded payload.
pub fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> Result<Vec<u8>> {
    debug_assert!((1..=8).contains(&from_bits) && (1..=8).contains(&to_bits));
    let max_value: u32 = (1 << to_bits) - 1;
    // Wide enough for from_bits + to_bits - 1 buffered bits
    let max_acc: u32 = (1 << (from_bits + to_bits - 1)) - 1;

    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut ret = Vec::with_capacity(
        (data.len() * from_bits as usize + to_bits as usize - 1) / to_bits as usize,
    );
    for &value in data {
        let value = u32::from(value);
        if value >> from_bits != 0 {
            return Err(DecoderError::ValueOutOfRange {
                value,
                width: from_bits,
            });
        }
        acc = ((acc << from_bits) | value) & max_acc;
        bits += from_bits;
        while bits >= to_bits {
            bits -= to_bits;
            ret.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            ret.push(((acc << (to_bits - bits)) & max_value) as u8);
        }
    } else if bits >= from_bits {
        return Err(DecoderError::InvalidPadding(format!(
            "{bits} leftover bits"
        )));
    } else if (acc << (to_bits - bits)) & max_value != 0 {
        return Err(DecoderError::InvalidPadding(
            "non-zero padding bits".to_string(),
        ));
    }
    Ok(ret)
}

/// Regroup 8-bit payload bytes into 5-bit symbols, padding the tail
pub fn bytes_to_words(bytes: &[u8]) -> Result<Vec<u8>> {
    convert_bits(bytes, 8, 5, true)
}

/// Regroup 5-bit symbols back into payload bytes, rejecting dirty padding
pub fn words_to_bytes(words: &[u8]) -> Result<Vec<u8>> {
    convert_bits(words, 5, 8, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regroup_golden_values() {
        assert_eq!(convert_bits(&[255], 8, 5, true).unwrap(), vec![31, 28]);
        assert_eq!(convert_bits(&[31, 28], 5, 8, false).unwrap(), vec![255]);
        assert_eq!(convert_bits(&[0], 8, 5, true).unwrap(), vec![0, 0]);
    }

    #[test]
    fn test_empty_input() {
        assert!(convert_bits(&[], 8, 5, true).unwrap().is_empty());
        assert!(convert_bits(&[], 5, 8, false).unwrap().is_empty());
    }

    #[test]
    fn test_value_out_of_range() {
        assert!(matches!(
            convert_bits(&[32], 5, 8, false),
            Err(DecoderError::ValueOutOfRange { value: 32, width: 5 })
        ));
        assert!(matches!(
            convert_bits(&[0, 1, 200], 5, 8, true),
            Err(DecoderError::ValueOutOfRange { value: 200, width: 5 })
        ));
    }

    #[test]
    fn test_unpadded_rejects_nonzero_padding() {
        // 10 bits: one full byte plus two non-zero leftover bits
        assert!(matches!(
            convert_bits(&[31, 31], 5, 8, false),
            Err(DecoderError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_unpadded_rejects_excess_leftover_bits() {
        // 6 symbols carry 30 bits: three bytes plus 6 leftover bits,
        // one whole source group too many
        assert!(matches!(
            convert_bits(&[0; 6], 5, 8, false),
            Err(DecoderError::InvalidPadding(_))
        ));
    }

    #[test]
    fn test_unpadded_accepts_clean_zero_padding() {
        // 7 symbols carry 35 bits: four bytes plus 3 zero leftover bits
        assert_eq!(
            convert_bits(&[1, 0, 0, 0, 0, 0, 0], 5, 8, false).unwrap(),
            vec![8, 0, 0, 0]
        );
    }

    #[test]
    fn test_bytes_words_inverse() {
        let payloads: [&[u8]; 5] = [
            &[],
            &[0],
            &[255; 32],
            &[1, 2, 3, 4, 5],
            &[0xde, 0xad, 0xbe, 0xef],
        ];
        for payload in payloads {
            let words = bytes_to_words(payload).unwrap();
            assert!(words.iter().all(|&w| w < 32));
            assert_eq!(words_to_bytes(&words).unwrap(), payload);
        }
    }
}
