//! Bit-level operations
//!
//! Two groups of functions:
//! - buffer bits: single bits and multi-bit fields addressed by bit index
//!   (LSB-first within each byte)
//! - integer bits: test/set/clear/toggle on one already-loaded value
//!
//! Out-of-range indices never fail here. Reads see `false`/zero, writes and
//! twiddles leave the data unchanged.

use std::ops::Range;

use super::FixedWidth;
use crate::error::{CodecError, Result};

#[inline]
fn locate(bit_index: usize) -> (usize, u8) {
    (bit_index / 8, (bit_index % 8) as u8)
}

// ============================================================================
// Buffer Bits
// ============================================================================

/// Whether bit `bit_index` of the buffer is set
///
/// Bit 0 is the least significant bit of byte 0. Indices past the end of the
/// buffer read as `false`.
#[inline]
pub fn read_bit(bytes: &[u8], bit_index: usize) -> bool {
    let (byte_index, bit) = locate(bit_index);
    bytes
        .get(byte_index)
        .is_some_and(|byte| (byte >> bit) & 0x01 != 0)
}

/// [`read_bit`] over every index in `bit_range`, in order
pub fn read_bits(bytes: &[u8], bit_range: Range<usize>) -> Vec<bool> {
    bit_range.map(|index| read_bit(bytes, index)).collect()
}

/// Set or clear bit `bit_index` of the buffer
///
/// Returns `false` without touching the buffer when the index is past the end.
#[inline]
pub fn write_bit(bytes: &mut [u8], bit_index: usize, value: bool) -> bool {
    let (byte_index, bit) = locate(bit_index);
    match bytes.get_mut(byte_index) {
        Some(byte) => {
            if value {
                *byte |= 1 << bit;
            } else {
                *byte &= !(1 << bit);
            }
            true
        },
        None => false,
    }
}

fn check_bit_length(bit_length: u8) -> Result<()> {
    if (1..=64).contains(&bit_length) {
        Ok(())
    } else {
        Err(CodecError::InvalidBitLength(bit_length))
    }
}

/// Extract a multi-bit field from the buffer (LSB-first bit ordering)
///
/// Reads `bit_length` (1-64) bits starting at `start_bit`. Bits past the end
/// of the buffer contribute zero.
pub fn extract_bits(bytes: &[u8], start_bit: usize, bit_length: u8) -> Result<u64> {
    check_bit_length(bit_length)?;

    let mut result = 0u64;
    for i in 0..bit_length {
        if read_bit(bytes, start_bit.saturating_add(i as usize)) {
            result |= 1u64 << i;
        }
    }

    Ok(result)
}

/// Extract a signed multi-bit field, sign-extending from its top bit
pub fn extract_bits_signed(bytes: &[u8], start_bit: usize, bit_length: u8) -> Result<i64> {
    let unsigned = extract_bits(bytes, start_bit, bit_length)?;
    if bit_length == 64 {
        return Ok(unsigned as i64);
    }

    let sign_bit = 1u64 << (bit_length - 1);
    if unsigned & sign_bit != 0 {
        let mask = !((1u64 << bit_length) - 1);
        Ok((unsigned | mask) as i64)
    } else {
        Ok(unsigned as i64)
    }
}

/// Insert the low `bit_length` bits of `value` at `start_bit`
///
/// Uses the same bit ordering as [`extract_bits`]. Bits that fall past the
/// end of the buffer are skipped.
pub fn insert_bits(bytes: &mut [u8], start_bit: usize, bit_length: u8, value: u64) -> Result<()> {
    check_bit_length(bit_length)?;

    for i in 0..bit_length {
        let bit_value = (value >> i) & 0x01 == 1;
        write_bit(bytes, start_bit.saturating_add(i as usize), bit_value);
    }

    Ok(())
}

// ============================================================================
// Integer Bits
// ============================================================================

/// Whether bit `index` of `value` is set; `false` outside `0..T::BITS`
#[inline]
pub fn test_bit<T: FixedWidth>(value: T, index: usize) -> bool {
    index < T::BITS as usize && (value.to_bits() >> index) & 0x01 != 0
}

/// Copy of `value` with bit `index` set; unchanged when out of range
#[inline]
pub fn set_bit<T: FixedWidth>(value: T, index: usize) -> T {
    if index >= T::BITS as usize {
        return value;
    }
    T::from_bits(value.to_bits() | (1u64 << index))
}

/// Copy of `value` with bit `index` cleared; unchanged when out of range
#[inline]
pub fn clear_bit<T: FixedWidth>(value: T, index: usize) -> T {
    if index >= T::BITS as usize {
        return value;
    }
    T::from_bits(value.to_bits() & !(1u64 << index))
}

/// Copy of `value` with bit `index` flipped; unchanged when out of range
#[inline]
pub fn toggle_bit<T: FixedWidth>(value: T, index: usize) -> T {
    if index >= T::BITS as usize {
        return value;
    }
    T::from_bits(value.to_bits() ^ (1u64 << index))
}

/// One boolean per bit of `value`, least significant bit first
pub fn to_bool_array<T: FixedWidth>(value: T) -> Vec<bool> {
    (0..T::BITS as usize).map(|index| test_bit(value, index)).collect()
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_read_bit() {
        let data = [0b0000_0101u8];
        assert!(read_bit(&data, 0));
        assert!(!read_bit(&data, 1));
        assert!(read_bit(&data, 2));
        assert!(!read_bit(&data, 8));
        assert!(!read_bit(&[], 0));
    }

    #[test]
    fn test_read_bits_across_bytes() {
        let data = [0b1000_0000u8, 0b0000_0001];
        assert_eq!(read_bits(&data, 6..10), vec![false, true, true, false]);
        assert_eq!(read_bits(&data, 15..18), vec![false, false, false]);
    }

    #[test]
    fn test_write_bit() {
        let mut data = [0u8; 2];
        assert!(write_bit(&mut data, 9, true));
        assert_eq!(data, [0x00, 0x02]);
        assert!(write_bit(&mut data, 9, false));
        assert_eq!(data, [0x00, 0x00]);
        assert!(!write_bit(&mut data, 16, true));
        assert_eq!(data, [0x00, 0x00]);
    }

    #[test]
    fn test_extract_bits_basic() {
        let data = [0b10110101, 0b11001100];

        assert_eq!(extract_bits(&data, 2, 4).unwrap(), 0b1101);
        assert_eq!(extract_bits(&data, 4, 8).unwrap(), 0b11001011);
    }

    #[test]
    fn test_extract_bits_past_end_reads_zero() {
        let data = [0xFF];
        assert_eq!(extract_bits(&data, 4, 8).unwrap(), 0x0F);
    }

    #[test]
    fn test_extract_bits_invalid_length() {
        assert_eq!(extract_bits(&[0xFF], 0, 0), Err(CodecError::InvalidBitLength(0)));
        assert!(extract_bits(&[0xFF], 0, 65).is_err());
    }

    #[test]
    fn test_extract_bits_signed() {
        let data = [0b11111111];
        assert_eq!(extract_bits_signed(&data, 0, 4).unwrap(), -1);
        assert_eq!(extract_bits_signed(&[0b0111], 0, 4).unwrap(), 7);

        let full = [0xFF; 8];
        assert_eq!(extract_bits_signed(&full, 0, 64).unwrap(), -1);
    }

    #[test]
    fn test_insert_bits_basic() {
        let mut data = [0u8; 2];
        insert_bits(&mut data, 2, 4, 0b1101).unwrap();
        assert_eq!(data[0], 0b00110100);
    }

    #[test]
    fn test_insert_extract_roundtrip() {
        let original = [0b10110101u8, 0b11001100];
        let mut data = [0u8; 2];

        let value = extract_bits(&original, 2, 10).unwrap();
        insert_bits(&mut data, 2, 10, value).unwrap();

        assert_eq!(
            extract_bits(&data, 2, 10).unwrap(),
            extract_bits(&original, 2, 10).unwrap()
        );
    }

    #[test]
    fn test_integer_bit_helpers() {
        let value = 0b1010_1100u8;
        assert!(!test_bit(value, 0));
        assert!(test_bit(value, 2));
        assert!(test_bit(value, 7));
        assert!(!test_bit(value, 8));

        assert_eq!(set_bit(value, 0), 0b1010_1101);
        assert_eq!(clear_bit(value, 7), 0b0010_1100);
        assert_eq!(toggle_bit(value, 3), 0b1010_0100);
    }

    #[test]
    fn test_integer_bit_helpers_out_of_range() {
        assert_eq!(set_bit(0u16, 16), 0);
        assert_eq!(clear_bit(u32::MAX, 32), u32::MAX);
        assert_eq!(toggle_bit(5i8, 100), 5);
    }

    #[test]
    fn test_signed_sign_bit() {
        assert!(test_bit(-1i16, 15));
        assert_eq!(set_bit(0i8, 7), i8::MIN);
        assert_eq!(clear_bit(-1i32, 31), i32::MAX);
    }

    #[test]
    fn test_to_bool_array() {
        let bits = to_bool_array(0b0000_0101u8);
        assert_eq!(bits.len(), 8);
        assert_eq!(
            bits,
            vec![true, false, true, false, false, false, false, false]
        );
        assert_eq!(to_bool_array(0u64).len(), 64);
        assert!(to_bool_array(-1i32).iter().all(|&b| b));
    }
}
