//! Word composition between integer widths
//!
//! Builds wider integers from sequences of narrower ones (bytes → words,
//! words → full words, ...) and splits them back apart.
//!
//! `Endian::Little` means the first part is the least significant one,
//! `Endian::Big` means the first part is the most significant one.

use super::{Endian, FixedWidth};

/// Number of `N` parts that make up one `W`, or `None` if `N` is wider
#[inline]
fn parts_per<N: FixedWidth, W: FixedWidth>() -> Option<usize> {
    (N::SIZE <= W::SIZE).then(|| W::SIZE / N::SIZE)
}

/// Compose a `W` from the first `W::SIZE / N::SIZE` values of `parts`
///
/// Returns `None` when `parts` is too short or `N` is wider than `W`.
///
/// ```
/// use bytekit::bytes::{compose, Endian};
///
/// let value: Option<u32> = compose(&[0x1234u16, 0x5678], Endian::Big);
/// assert_eq!(value, Some(0x1234_5678));
/// ```
pub fn compose<N: FixedWidth, W: FixedWidth>(parts: &[N], endian: Endian) -> Option<W> {
    let count = parts_per::<N, W>()?;
    let parts = parts.get(..count)?;

    let push = |acc: u64, part: &N| acc.checked_shl(N::BITS).unwrap_or(0) | part.to_bits();
    let bits = match endian {
        Endian::Little => parts.iter().rev().fold(0u64, push),
        Endian::Big => parts.iter().fold(0u64, push),
    };

    Some(W::from_bits(bits))
}

/// Split a `W` into `W::SIZE / N::SIZE` parts, ordered per `endian`
///
/// Returns an empty vector when `N` is wider than `W`.
pub fn split<W: FixedWidth, N: FixedWidth>(value: W, endian: Endian) -> Vec<N> {
    let Some(count) = parts_per::<N, W>() else {
        return Vec::new();
    };

    let bits = value.to_bits();
    let mut parts: Vec<N> = (0..count)
        .map(|i| N::from_bits(bits >> (i as u32 * N::BITS)))
        .collect();

    if endian.is_big() {
        parts.reverse();
    }
    parts
}

/// Convert 2 bytes to u16
pub fn u16_from_bytes(bytes: &[u8], endian: Endian) -> Option<u16> {
    compose(bytes, endian)
}

/// Convert 4 bytes to u32
pub fn u32_from_bytes(bytes: &[u8], endian: Endian) -> Option<u32> {
    compose(bytes, endian)
}

/// Convert 2 u16 words to u32
pub fn u32_from_words(words: &[u16], endian: Endian) -> Option<u32> {
    compose(words, endian)
}

/// Convert 8 bytes to u64
pub fn u64_from_bytes(bytes: &[u8], endian: Endian) -> Option<u64> {
    compose(bytes, endian)
}

/// Convert 4 u16 words to u64
pub fn u64_from_words(words: &[u16], endian: Endian) -> Option<u64> {
    compose(words, endian)
}

/// Convert 2 u32 full words to u64
pub fn u64_from_fwords(fwords: &[u32], endian: Endian) -> Option<u64> {
    compose(fwords, endian)
}
