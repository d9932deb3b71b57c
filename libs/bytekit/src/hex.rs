//! Hex encoding utilities
//!
//! Lowercase/uppercase encoding, tolerant decoding and offset-prefixed dumps.

use crate::error::Result;

/// Default number of bytes per dump line
pub const DEFAULT_DUMP_WIDTH: usize = 16;

/// Encode bytes to lowercase hex string
/// Example: "Huh!" -> "48756821"
pub fn encode_lower(data: &[u8]) -> String {
    ::hex::encode(data)
}

/// Encode bytes to uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: &[u8]) -> String {
    ::hex::encode_upper(data)
}

/// Decode a hex string to bytes
///
/// Accepts an optional `0x` prefix and ignores ASCII whitespace between digits.
pub fn decode(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let digits = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    let compact: String = digits.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    Ok(::hex::decode(compact)?)
}

/// Render a classic hex dump, one line per `width` bytes
///
/// Line layout: `00000010  48 75 68 21 ...  |Huh!...|`. The hex column is
/// padded on the last line so the ASCII column stays aligned. A `width` of 0
/// falls back to [`DEFAULT_DUMP_WIDTH`]; widths beyond the data length are
/// capped to it.
pub fn dump_lines(data: &[u8], width: usize, upper: bool) -> Vec<String> {
    let width = if width == 0 { DEFAULT_DUMP_WIDTH } else { width };
    // A single line needs no alignment padding, so never go wider than the data
    let width = width.min(data.len().max(1));

    data.chunks(width)
        .enumerate()
        .map(|(index, chunk)| {
            let mut line = format!("{:08x}  ", index * width);
            line.extend(chunk.iter().map(|byte| {
                if upper {
                    format!("{:02X} ", byte)
                } else {
                    format!("{:02x} ", byte)
                }
            }));
            line.push_str(&"   ".repeat(width - chunk.len()));

            line.push(' ');
            line.push('|');
            line.extend(chunk.iter().map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            }));
            line.push('|');
            line
        })
        .collect()
}
