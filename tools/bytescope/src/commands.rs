//! Subcommand implementations
//!
//! Each command renders to strings so `main` only prints. Runtime `Width`
//! values are dispatched onto the generic codec functions by `with_width!`.

use std::ops::Range;
use std::path::Path;

use anyhow::{anyhow, bail, Context, Result};
use bytekit::bytes::{read_array, read_bits, read_integer, read_padded_array, write_integer};
use bytekit::{numfmt, text, Endian, FixedWidth, Width};
use clap::ValueEnum;
use tracing::{debug, info};

/// Call `$func::<T>(args..)` with `T` chosen by a runtime [`Width`]
macro_rules! with_width {
    ($width:expr, $func:ident($($arg:expr),* $(,)?)) => {
        match $width {
            Width::U8 => $func::<u8>($($arg),*),
            Width::U16 => $func::<u16>($($arg),*),
            Width::U32 => $func::<u32>($($arg),*),
            Width::U64 => $func::<u64>($($arg),*),
            Width::I8 => $func::<i8>($($arg),*),
            Width::I16 => $func::<i16>($($arg),*),
            Width::I32 => $func::<i32>($($arg),*),
            Width::I64 => $func::<i64>($($arg),*),
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Encoding {
    Ascii,
    Utf8,
    Utf16,
}

/// Options for the `ints` command
#[derive(Debug, Clone, Copy)]
pub struct IntsOptions {
    pub width: Width,
    pub endian: Endian,
    pub padded: bool,
    pub grouped: bool,
}

/// Result of a `patch` command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatchOutcome {
    pub requested: usize,
    pub resolved: usize,
    pub rendered: String,
}

impl PatchOutcome {
    pub fn was_clamped(&self) -> bool {
        self.requested != self.resolved
    }
}

pub fn load_file(path: &Path) -> Result<Vec<u8>> {
    let data =
        std::fs::read(path).with_context(|| format!("Failed to read {}", path.display()))?;
    debug!("Loaded {} bytes from {}", data.len(), path.display());
    Ok(data)
}

/// Build a byte range from optional bounds; `None` when neither is given
pub fn byte_range(start: Option<usize>, end: Option<usize>, len: usize) -> Option<Range<usize>> {
    match (start, end) {
        (None, None) => None,
        (start, end) => Some(start.unwrap_or(0)..end.unwrap_or(len)),
    }
}

/// Parse a decimal or `0x`-prefixed hex literal for type `T`
///
/// Hex literals may also be a full-width bit pattern, so `0xFFFF` is `-1`
/// for `i16`, matching what `read` prints.
pub fn parse_value<T: FixedWidth>(input: &str) -> Option<T> {
    let trimmed = input.trim();
    let unsigned = trimmed.strip_prefix('-').unwrap_or(trimmed);
    if unsigned.starts_with("0x") || unsigned.starts_with("0X") {
        T::from_hex(trimmed).or_else(|| parse_bit_pattern(trimmed))
    } else {
        trimmed.parse().ok()
    }
}

fn parse_bit_pattern<T: FixedWidth>(input: &str) -> Option<T> {
    let digits = input
        .strip_prefix("0x")
        .or_else(|| input.strip_prefix("0X"))?;
    if digits.starts_with('+') {
        return None;
    }
    let bits = u64::from_str_radix(digits, 16).ok()?;
    (T::BITS == 64 || bits >> T::BITS == 0).then(|| T::from_bits(bits))
}

fn render_value<T: FixedWidth + itoa::Integer>(value: T, grouped: bool) -> String {
    if grouped {
        format!("{} ({})", numfmt::format_grouped(value), value.to_hex())
    } else {
        format!("{} ({})", value, value.to_hex())
    }
}

fn ints_typed<T: FixedWidth + itoa::Integer>(
    data: &[u8],
    endian: Endian,
    range: Option<Range<usize>>,
    padded: bool,
    grouped: bool,
) -> Result<Vec<String>> {
    let start = range.as_ref().map_or(0, |r| r.start);
    let values: Vec<T> = if padded {
        read_padded_array(data, endian, range)?
    } else {
        read_array(data, endian, range)?
    };

    Ok(values
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            format!(
                "{:08x}  {}",
                start + index * T::SIZE,
                render_value(value, grouped)
            )
        })
        .collect())
}

/// Decode the selected range as an array of integers, one line per element
pub fn ints(data: &[u8], options: IntsOptions, range: Option<Range<usize>>) -> Result<Vec<String>> {
    with_width!(
        options.width,
        ints_typed(data, options.endian, range, options.padded, options.grouped)
    )
}

fn read_typed<T: FixedWidth + itoa::Integer>(
    data: &[u8],
    offset: usize,
    endian: Endian,
) -> Result<String> {
    let value: T = read_integer(data, offset, endian)?;
    Ok(render_value(value, false))
}

/// Read a single integer; out-of-bounds offsets are errors
pub fn read(data: &[u8], width: Width, offset: usize, endian: Endian) -> Result<String> {
    with_width!(width, read_typed(data, offset, endian))
        .with_context(|| format!("Cannot read {} at offset {}", width, offset))
}

/// Bits in `range` as a `0`/`1` string, bit 0 of byte 0 first
pub fn bits(data: &[u8], range: Range<usize>) -> String {
    read_bits(data, range)
        .into_iter()
        .map(|bit| if bit { '1' } else { '0' })
        .collect()
}

pub fn decode_text(data: &[u8], encoding: Encoding) -> Result<String> {
    let decoded = match encoding {
        Encoding::Ascii => text::ascii(data),
        Encoding::Utf8 => text::utf8(data),
        Encoding::Utf16 => text::utf16(data),
    };
    decoded.ok_or_else(|| anyhow!("Data is not valid {:?}", encoding))
}

fn patch_typed<T: FixedWidth>(data: &mut [u8], offset: usize, value: &str) -> Result<PatchOutcome> {
    let parsed: T = parse_value(value)
        .ok_or_else(|| anyhow!("'{}' is not a valid {} value", value, T::WIDTH))?;

    let Some(resolved) = write_integer(data, parsed, offset) else {
        bail!(
            "Buffer of {} bytes is too short for a {} write",
            data.len(),
            T::WIDTH
        );
    };

    Ok(PatchOutcome {
        requested: offset,
        resolved,
        rendered: parsed.to_hex(),
    })
}

/// Write `value` into `data` at the clamped `offset`
pub fn patch(data: &mut [u8], width: Width, offset: usize, value: &str) -> Result<PatchOutcome> {
    with_width!(width, patch_typed(data, offset, value))
}

/// Patch `input` and write the result to `output` (or back to `input`)
pub fn patch_file(
    input: &Path,
    output: Option<&Path>,
    width: Width,
    offset: usize,
    value: &str,
) -> Result<PatchOutcome> {
    let mut data = load_file(input)?;
    let outcome = patch(&mut data, width, offset, value)?;

    let target = output.unwrap_or(input);
    std::fs::write(target, &data)
        .with_context(|| format!("Failed to write {}", target.display()))?;
    info!(
        "Patched {} at offset {} into {}",
        width,
        outcome.resolved,
        target.display()
    );
    Ok(outcome)
}
