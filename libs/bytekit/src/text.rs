//! Text views of byte buffers
//!
//! Each decoder returns `None` instead of substituting replacement
//! characters, so a `Some` result always round-trips to the same bytes.

/// Decode as ASCII; `None` if any byte is 0x80 or above
pub fn ascii(bytes: &[u8]) -> Option<String> {
    if bytes.is_ascii() {
        Some(bytes.iter().map(|&b| b as char).collect())
    } else {
        None
    }
}

/// Decode as UTF-8; `None` on invalid sequences
pub fn utf8(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_owned)
}

/// Decode as UTF-16
///
/// A leading byte order mark (`FE FF` or `FF FE`) selects the byte order and
/// is stripped. Without one the data is read big-endian. Odd lengths and
/// unpaired surrogates give `None`.
pub fn utf16(bytes: &[u8]) -> Option<String> {
    if bytes.len() % 2 != 0 {
        return None;
    }

    let (little, body) = match bytes {
        [0xFF, 0xFE, rest @ ..] => (true, rest),
        [0xFE, 0xFF, rest @ ..] => (false, rest),
        _ => (false, bytes),
    };

    let units = body.chunks_exact(2).map(|pair| {
        let pair = [pair[0], pair[1]];
        if little {
            u16::from_le_bytes(pair)
        } else {
            u16::from_be_bytes(pair)
        }
    });

    char::decode_utf16(units).collect::<Result<String, _>>().ok()
}

/// UTF-8 bytes of `text`
pub fn to_bytes(text: &str) -> Vec<u8> {
    text.as_bytes().to_vec()
}
