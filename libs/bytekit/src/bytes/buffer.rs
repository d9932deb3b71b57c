//! Bounded integer reads and clamped writes over byte buffers
//!
//! Reads are fail-fast: a read that would run past the end of the buffer
//! returns `CodecError::OutOfBounds`. Writes never fail: the offset is
//! clamped so the value lands inside the buffer.

use std::ops::Range;

use tracing::{debug, trace};

use super::{bit_ops, Endian, FixedWidth};
use crate::error::{CodecError, Result};

// ============================================================================
// Single Value Reads
// ============================================================================

/// Read a `T` from `T::SIZE` bytes starting at `offset`
pub fn read_integer<T: FixedWidth>(buffer: &[u8], offset: usize, endian: Endian) -> Result<T> {
    let end = offset
        .checked_add(T::SIZE)
        .filter(|&end| end <= buffer.len())
        .ok_or_else(|| CodecError::out_of_bounds(offset, T::SIZE, buffer.len()))?;
    Ok(T::decode(&buffer[offset..end], endian))
}

/// Read a `T` from the start of the buffer
#[inline]
pub fn read_leading<T: FixedWidth>(buffer: &[u8], endian: Endian) -> Result<T> {
    read_integer(buffer, 0, endian)
}

/// Unsigned 8-bit value at `offset`
#[inline]
pub fn byte(buffer: &[u8], offset: usize) -> Result<u8> {
    read_integer(buffer, offset, Endian::Little)
}

/// Unsigned 16-bit little-endian value at `offset`
#[inline]
pub fn word(buffer: &[u8], offset: usize) -> Result<u16> {
    read_integer(buffer, offset, Endian::Little)
}

/// Unsigned 32-bit little-endian value at `offset`
#[inline]
pub fn fword(buffer: &[u8], offset: usize) -> Result<u32> {
    read_integer(buffer, offset, Endian::Little)
}

/// Unsigned 64-bit little-endian value at `offset`
#[inline]
pub fn dfword(buffer: &[u8], offset: usize) -> Result<u64> {
    read_integer(buffer, offset, Endian::Little)
}

/// Signed 8-bit value at `offset`
#[inline]
pub fn sbyte(buffer: &[u8], offset: usize) -> Result<i8> {
    read_integer(buffer, offset, Endian::Little)
}

/// Signed 16-bit little-endian value at `offset`
#[inline]
pub fn sword(buffer: &[u8], offset: usize) -> Result<i16> {
    read_integer(buffer, offset, Endian::Little)
}

/// Signed 32-bit little-endian value at `offset`
#[inline]
pub fn sfword(buffer: &[u8], offset: usize) -> Result<i32> {
    read_integer(buffer, offset, Endian::Little)
}

/// Signed 64-bit little-endian value at `offset`
#[inline]
pub fn sdfword(buffer: &[u8], offset: usize) -> Result<i64> {
    read_integer(buffer, offset, Endian::Little)
}

// ============================================================================
// Array Reads
// ============================================================================

/// Validate an optional byte range against the buffer length
///
/// `None` selects the whole buffer.
pub fn resolve_range(len: usize, range: Option<Range<usize>>) -> Result<Range<usize>> {
    match range {
        None => Ok(0..len),
        Some(r) if r.start <= r.end && r.end <= len => Ok(r),
        Some(r) => Err(CodecError::invalid_range(r.start, r.end, len)),
    }
}

/// Decode consecutive `T` values from `range` (whole buffer when `None`)
///
/// Returns `range.len() / T::SIZE` values. Trailing bytes that do not fill
/// a whole `T` are dropped; use [`read_padded_array`] to keep them.
pub fn read_array<T: FixedWidth>(
    buffer: &[u8],
    endian: Endian,
    range: Option<Range<usize>>,
) -> Result<Vec<T>> {
    let range = resolve_range(buffer.len(), range)?;
    let chunks = buffer[range.clone()].chunks_exact(T::SIZE);

    let dropped = chunks.remainder().len();
    if dropped > 0 {
        trace!(
            "Truncating {} trailing byte(s) of {:?} for {}-byte elements",
            dropped,
            range,
            T::SIZE
        );
    }

    Ok(chunks.map(|chunk| T::decode(chunk, endian)).collect())
}

/// Decode `T` values from a zero-padded copy of `range`
///
/// The selected bytes are copied and extended with zeros to a multiple of
/// `T::SIZE`, so no trailing byte is lost. The input buffer is not touched.
pub fn read_padded_array<T: FixedWidth>(
    buffer: &[u8],
    endian: Endian,
    range: Option<Range<usize>>,
) -> Result<Vec<T>> {
    let range = resolve_range(buffer.len(), range)?;
    let mut padded = buffer[range].to_vec();

    let remainder = padded.len() % T::SIZE;
    if remainder != 0 {
        let fill = T::SIZE - remainder;
        trace!("Padding {} byte(s) to {} with {} zero(s)", padded.len(), padded.len() + fill, fill);
        padded.resize(padded.len() + fill, 0);
    }

    read_array(&padded, endian, None)
}

// ============================================================================
// Writes
// ============================================================================

/// Nearest offset at which `width` bytes fit inside `len`
///
/// `None` when the buffer is shorter than `width`.
#[inline]
pub fn clamp_offset(len: usize, width: usize, offset: usize) -> Option<usize> {
    len.checked_sub(width).map(|last| offset.min(last))
}

/// Write `value` little-endian at `offset`, clamped into the buffer
///
/// Returns the offset actually written. A buffer shorter than `T::SIZE` has
/// no valid offset; nothing is written and `None` is returned.
pub fn write_integer<T: FixedWidth>(buffer: &mut [u8], value: T, offset: usize) -> Option<usize> {
    let Some(resolved) = clamp_offset(buffer.len(), T::SIZE, offset) else {
        debug!(
            "Skipping {}-byte write: buffer holds only {} byte(s)",
            T::SIZE,
            buffer.len()
        );
        return None;
    };

    if resolved != offset {
        debug!("Clamped {}-byte write from offset {} to {}", T::SIZE, offset, resolved);
    }

    value.encode_le(&mut buffer[resolved..resolved + T::SIZE]);
    Some(resolved)
}

/// Write `value` at the byte holding bit position `cursor`, then advance it
///
/// `cursor` counts bits. The write goes to byte offset `cursor / 8` (clamped
/// like [`write_integer`]) and the cursor moves forward by `T::BITS`, so
/// consecutive calls pack fields back to back.
pub fn write_integer_advancing<T: FixedWidth>(
    buffer: &mut [u8],
    value: T,
    cursor: &mut usize,
) -> Option<usize> {
    let written = write_integer(buffer, value, *cursor / 8);
    *cursor = cursor.saturating_add(T::BITS as usize);
    written
}

// ============================================================================
// Method Syntax
// ============================================================================

/// Codec operations as methods on byte slices (and `Vec<u8>` via deref)
pub trait ByteBufferExt {
    fn read_integer<T: FixedWidth>(&self, offset: usize, endian: Endian) -> Result<T>;
    fn read_leading<T: FixedWidth>(&self, endian: Endian) -> Result<T>;
    fn read_array<T: FixedWidth>(&self, endian: Endian, range: Option<Range<usize>>)
        -> Result<Vec<T>>;
    fn read_padded_array<T: FixedWidth>(
        &self,
        endian: Endian,
        range: Option<Range<usize>>,
    ) -> Result<Vec<T>>;
    fn read_bit(&self, bit_index: usize) -> bool;
    fn read_bits(&self, bit_range: Range<usize>) -> Vec<bool>;
    fn write_integer<T: FixedWidth>(&mut self, value: T, offset: usize) -> Option<usize>;
    fn write_integer_advancing<T: FixedWidth>(&mut self, value: T, cursor: &mut usize)
        -> Option<usize>;

    fn byte(&self, offset: usize) -> Result<u8> {
        self.read_integer(offset, Endian::Little)
    }
    fn word(&self, offset: usize) -> Result<u16> {
        self.read_integer(offset, Endian::Little)
    }
    fn fword(&self, offset: usize) -> Result<u32> {
        self.read_integer(offset, Endian::Little)
    }
    fn dfword(&self, offset: usize) -> Result<u64> {
        self.read_integer(offset, Endian::Little)
    }
    fn sbyte(&self, offset: usize) -> Result<i8> {
        self.read_integer(offset, Endian::Little)
    }
    fn sword(&self, offset: usize) -> Result<i16> {
        self.read_integer(offset, Endian::Little)
    }
    fn sfword(&self, offset: usize) -> Result<i32> {
        self.read_integer(offset, Endian::Little)
    }
    fn sdfword(&self, offset: usize) -> Result<i64> {
        self.read_integer(offset, Endian::Little)
    }
}

impl ByteBufferExt for [u8] {
    fn read_integer<T: FixedWidth>(&self, offset: usize, endian: Endian) -> Result<T> {
        read_integer(self, offset, endian)
    }

    fn read_leading<T: FixedWidth>(&self, endian: Endian) -> Result<T> {
        read_leading(self, endian)
    }

    fn read_array<T: FixedWidth>(
        &self,
        endian: Endian,
        range: Option<Range<usize>>,
    ) -> Result<Vec<T>> {
        read_array(self, endian, range)
    }

    fn read_padded_array<T: FixedWidth>(
        &self,
        endian: Endian,
        range: Option<Range<usize>>,
    ) -> Result<Vec<T>> {
        read_padded_array(self, endian, range)
    }

    fn read_bit(&self, bit_index: usize) -> bool {
        bit_ops::read_bit(self, bit_index)
    }

    fn read_bits(&self, bit_range: Range<usize>) -> Vec<bool> {
        bit_ops::read_bits(self, bit_range)
    }

    fn write_integer<T: FixedWidth>(&mut self, value: T, offset: usize) -> Option<usize> {
        write_integer(self, value, offset)
    }

    fn write_integer_advancing<T: FixedWidth>(
        &mut self,
        value: T,
        cursor: &mut usize,
    ) -> Option<usize> {
        write_integer_advancing(self, value, cursor)
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_read_integer_endianness() {
        let data = [0x01, 0x02];
        assert_eq!(read_integer::<u16>(&data, 0, Endian::Little).unwrap(), 0x0201);
        assert_eq!(read_integer::<u16>(&data, 0, Endian::Big).unwrap(), 0x0102);
    }

    #[test]
    fn test_read_integer_out_of_bounds() {
        let data = [0u8; 5];
        assert_eq!(
            read_integer::<u32>(&data, 2, Endian::Little),
            Err(CodecError::out_of_bounds(2, 4, 5))
        );
        assert!(read_integer::<u32>(&data, 1, Endian::Little).is_ok());
        assert!(read_integer::<u8>(&[], 0, Endian::Little).is_err());
    }

    #[test]
    fn test_read_integer_offset_overflow() {
        let data = [0u8; 8];
        let err = read_integer::<u64>(&data, usize::MAX, Endian::Big).unwrap_err();
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_named_accessors() {
        let data = [0xFE, 0xFF, 0xFF, 0xFF, 0x01, 0x00, 0x00, 0x00, 0x7F];

        assert_eq!(byte(&data, 0).unwrap(), 0xFE);
        assert_eq!(sbyte(&data, 0).unwrap(), -2);
        assert_eq!(word(&data, 0).unwrap(), 0xFFFE);
        assert_eq!(sword(&data, 0).unwrap(), -2);
        assert_eq!(fword(&data, 4).unwrap(), 1);
        assert_eq!(sfword(&data, 0).unwrap(), -2);
        assert_eq!(dfword(&data, 0).unwrap(), 0x0000_0001_FFFF_FFFE);
        assert_eq!(sdfword(&data, 1).unwrap(), 0x7F00_0000_01FF_FFFF);
        assert!(dfword(&data, 2).is_err());
    }

    #[test]
    fn test_read_leading() {
        let data = [0x34, 0x12, 0xFF];
        assert_eq!(read_leading::<u16>(&data, Endian::Little).unwrap(), 0x1234);
        assert!(read_leading::<u32>(&data, Endian::Little).is_err());
    }

    #[test]
    fn test_read_array_truncates() {
        let data = [0x01, 0x02, 0x03];
        let values: Vec<u16> = read_array(&data, Endian::Little, None).unwrap();
        assert_eq!(values, vec![0x0201]);
    }

    #[test]
    fn test_read_array_with_range() {
        let data = [0xAA, 0x00, 0x01, 0x00, 0x02, 0xBB];
        let values: Vec<u16> = read_array(&data, Endian::Big, Some(1..5)).unwrap();
        assert_eq!(values, vec![0x0001, 0x0002]);

        let empty: Vec<u32> = read_array(&data, Endian::Big, Some(1..4)).unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_read_array_invalid_range() {
        let data = [0u8; 4];
        #[allow(clippy::reversed_empty_ranges)]
        let reversed = read_array::<u8>(&data, Endian::Little, Some(3..1));
        assert_eq!(reversed, Err(CodecError::invalid_range(3, 1, 4)));
        assert!(read_array::<u8>(&data, Endian::Little, Some(0..5)).is_err());
    }

    #[test]
    fn test_read_padded_array() {
        let data = vec![0x01u8, 0x02, 0x03];
        let values: Vec<u16> = read_padded_array(&data, Endian::Little, None).unwrap();
        assert_eq!(values, vec![0x0201, 0x0003]);
        assert_eq!(data, vec![0x01, 0x02, 0x03]);

        let big: Vec<u32> = read_padded_array(&data, Endian::Big, Some(1..3)).unwrap();
        assert_eq!(big, vec![0x0203_0000]);
    }

    #[test]
    fn test_read_padded_array_exact_multiple() {
        let data = [0x01, 0x00, 0x02, 0x00];
        let values: Vec<u16> = read_padded_array(&data, Endian::Little, None).unwrap();
        assert_eq!(values, vec![1, 2]);
    }

    #[test]
    fn test_write_integer_clamps() {
        let mut data = vec![0u8; 6];
        assert_eq!(write_integer(&mut data, 0xAABBCCDDu32, 6), Some(2));
        assert_eq!(data, vec![0, 0, 0xDD, 0xCC, 0xBB, 0xAA]);
        assert_eq!(data.len(), 6);
    }

    #[test]
    fn test_write_integer_in_place() {
        let mut data = [0u8; 4];
        assert_eq!(write_integer(&mut data, -2i16, 1), Some(1));
        assert_eq!(data, [0x00, 0xFE, 0xFF, 0x00]);
    }

    #[test]
    fn test_write_integer_buffer_too_small() {
        let mut data = [0x11u8; 3];
        assert_eq!(write_integer(&mut data, u32::MAX, 0), None);
        assert_eq!(data, [0x11; 3]);
    }

    #[test]
    fn test_write_integer_advancing_packs_fields() {
        let mut data = [0u8; 7];
        let mut cursor = 0usize;

        write_integer_advancing(&mut data, 0x01u8, &mut cursor);
        write_integer_advancing(&mut data, 0x0302u16, &mut cursor);
        write_integer_advancing(&mut data, 0x07060504u32, &mut cursor);

        assert_eq!(cursor, 56);
        assert_eq!(data, [1, 2, 3, 4, 5, 6, 7]);
    }

    #[test]
    fn test_write_integer_advancing_unaligned_cursor() {
        let mut data = [0u8; 4];
        let mut cursor = 12usize;

        assert_eq!(write_integer_advancing(&mut data, 0xAAu8, &mut cursor), Some(1));
        assert_eq!(cursor, 20);
        assert_eq!(data, [0x00, 0xAA, 0x00, 0x00]);
    }

    #[test]
    fn test_write_integer_advancing_clamps_past_end() {
        let mut data = [0u8; 4];
        let mut cursor = 64usize;

        assert_eq!(write_integer_advancing(&mut data, 0x0201u16, &mut cursor), Some(2));
        assert_eq!(cursor, 80);
        assert_eq!(data, [0x00, 0x00, 0x01, 0x02]);

        let mut data = [0u8; 8];
        let mut cursor = usize::MAX - 3;
        assert_eq!(write_integer_advancing(&mut data, 0x7Fu8, &mut cursor), Some(7));
        assert_eq!(cursor, usize::MAX);
        assert_eq!(data[7], 0x7F);
    }

    #[test]
    fn test_write_integer_advancing_skipped_write_still_advances() {
        let mut data = [0x11u8; 2];
        let mut cursor = 0usize;

        assert_eq!(write_integer_advancing(&mut data, u32::MAX, &mut cursor), None);
        assert_eq!(cursor, 32);
        assert_eq!(data, [0x11, 0x11]);
    }

    #[test]
    fn test_extension_trait() {
        let mut data = vec![0u8; 4];
        data.write_integer(0x1234u16, 0);
        assert_eq!(data.word(0).unwrap(), 0x1234);
        assert_eq!(data.read_integer::<u16>(0, Endian::Big).unwrap(), 0x3412);
        assert!(data.read_bit(2));
        assert!(data.fword(1).is_err());
    }

    #[test]
    fn test_clamp_offset() {
        assert_eq!(clamp_offset(10, 4, 3), Some(3));
        assert_eq!(clamp_offset(10, 4, 100), Some(6));
        assert_eq!(clamp_offset(3, 4, 0), None);
        assert_eq!(clamp_offset(4, 4, 1), Some(0));
    }

    #[test]
    #[tracing_test::traced_test]
    fn test_clamped_and_skipped_writes_are_logged() {
        let mut buffer = [0u8; 4];
        buffer.write_integer(1u16, 9);
        assert!(logs_contain("Clamped 2-byte write from offset 9 to 2"));

        buffer.write_integer(1u64, 0);
        assert!(logs_contain("Skipping 8-byte write"));
    }
}
