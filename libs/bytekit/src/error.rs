//! Codec Error Types

use thiserror::Error;

/// Result type for bytekit operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Codec errors
///
/// Only fail-fast operations produce these. Bit reads and integer writes
/// resolve out-of-range input to a defined value instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Multi-byte read past the end of the buffer
    #[error("Out of bounds: {width}-byte read at offset {offset} exceeds buffer length {len}")]
    OutOfBounds {
        offset: usize,
        width: usize,
        len: usize,
    },

    /// Byte range that is reversed or extends past the buffer
    #[error("Invalid range: {start}..{end} for buffer length {len}")]
    InvalidRange { start: usize, end: usize, len: usize },

    /// Bit-field length outside 1..=64
    #[error("Invalid bit length: {0} (expected 1..=64)")]
    InvalidBitLength(u8),

    /// Malformed hex input
    #[error("Invalid hex: {0}")]
    InvalidHex(String),
}

impl From<hex::FromHexError> for CodecError {
    fn from(err: hex::FromHexError) -> Self {
        CodecError::InvalidHex(err.to_string())
    }
}

impl CodecError {
    pub fn out_of_bounds(offset: usize, width: usize, len: usize) -> Self {
        CodecError::OutOfBounds { offset, width, len }
    }

    pub fn invalid_range(start: usize, end: usize, len: usize) -> Self {
        CodecError::InvalidRange { start, end, len }
    }

    /// Check if this error comes from a bounds violation
    pub fn is_bounds_error(&self) -> bool {
        matches!(
            self,
            CodecError::OutOfBounds { .. } | CodecError::InvalidRange { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_out_of_bounds() {
        let err = CodecError::out_of_bounds(2, 4, 5);
        assert_eq!(
            err.to_string(),
            "Out of bounds: 4-byte read at offset 2 exceeds buffer length 5"
        );
        assert!(err.is_bounds_error());
    }

    #[test]
    fn test_from_hex_error() {
        let err: CodecError = hex::FromHexError::OddLength.into();
        assert!(matches!(err, CodecError::InvalidHex(_)));
        assert!(!err.is_bounds_error());
    }
}
