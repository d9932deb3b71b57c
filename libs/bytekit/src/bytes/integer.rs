//! Fixed-width integer abstraction
//!
//! `FixedWidth` is implemented for exactly u8/u16/u32/u64 and i8/i16/i32/i64.
//! Codec functions are generic over it and monomorphise per width.

use super::Endian;

mod sealed {
    pub trait Sealed {}
}

/// Integer type with a fixed byte width and signedness
pub trait FixedWidth:
    sealed::Sealed
    + Copy
    + Default
    + PartialEq
    + std::fmt::Debug
    + std::fmt::Display
    + std::str::FromStr
    + Send
    + Sync
    + 'static
{
    /// Width in bytes
    const SIZE: usize;
    /// Width in bits
    const BITS: u32;
    /// Runtime tag for this type
    const WIDTH: Width;

    /// Decode from exactly `SIZE` bytes
    ///
    /// Callers slice the buffer first; a slice of another length is a bug in
    /// the caller and panics.
    fn decode(bytes: &[u8], endian: Endian) -> Self;

    /// Encode into the first `SIZE` bytes of `out`, least significant byte first
    fn encode_le(self, out: &mut [u8]);

    /// Bit pattern zero-extended to 64 bits
    fn to_bits(self) -> u64;

    /// Value from the low `BITS` bits of `bits`
    fn from_bits(bits: u64) -> Self;

    /// Parse a hexadecimal string (`"ff"`, `"0xFF"`, `"-0x7f"` for signed types)
    fn from_hex(s: &str) -> Option<Self>;

    /// `0x` followed by `BITS / 4` uppercase hex digits of the bit pattern
    fn to_hex(self) -> String {
        format!(
            "0x{:0width$X}",
            self.to_bits(),
            width = (Self::BITS / 4) as usize
        )
    }
}

macro_rules! impl_fixed_width {
    ($($t:ty => $unsigned:ty, $width:ident;)*) => {
        $(
            impl sealed::Sealed for $t {}

            impl FixedWidth for $t {
                const SIZE: usize = std::mem::size_of::<$t>();
                const BITS: u32 = <$t>::BITS;
                const WIDTH: Width = Width::$width;

                #[inline]
                fn decode(bytes: &[u8], endian: Endian) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$t>()];
                    raw.copy_from_slice(bytes);
                    match endian {
                        Endian::Little => <$t>::from_le_bytes(raw),
                        Endian::Big => <$t>::from_be_bytes(raw),
                    }
                }

                #[inline]
                fn encode_le(self, out: &mut [u8]) {
                    out[..Self::SIZE].copy_from_slice(&self.to_le_bytes());
                }

                #[inline]
                fn to_bits(self) -> u64 {
                    self as $unsigned as u64
                }

                #[inline]
                fn from_bits(bits: u64) -> Self {
                    bits as $t
                }

                fn from_hex(s: &str) -> Option<Self> {
                    let s = s.trim();
                    let (negative, rest) = match s.strip_prefix('-') {
                        Some(rest) => (true, rest),
                        None => (false, s),
                    };
                    let digits = rest
                        .strip_prefix("0x")
                        .or_else(|| rest.strip_prefix("0X"))
                        .unwrap_or(rest);
                    if digits.is_empty() || digits.starts_with(['+', '-']) {
                        return None;
                    }
                    if negative {
                        <$t>::from_str_radix(&format!("-{}", digits), 16).ok()
                    } else {
                        <$t>::from_str_radix(digits, 16).ok()
                    }
                }
            }
        )*
    };
}

impl_fixed_width! {
    u8 => u8, U8;
    u16 => u16, U16;
    u32 => u32, U32;
    u64 => u64, U64;
    i8 => u8, I8;
    i16 => u16, I16;
    i32 => u32, I32;
    i64 => u64, I64;
}

/// Runtime width/signedness tag
///
/// Used where the integer type is only known at runtime (CLI flags, config).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Width {
    U8,
    U16,
    U32,
    U64,
    I8,
    I16,
    I32,
    I64,
}

impl Width {
    /// Width in bytes
    pub fn size(&self) -> usize {
        match self {
            Self::U8 | Self::I8 => 1,
            Self::U16 | Self::I16 => 2,
            Self::U32 | Self::I32 => 4,
            Self::U64 | Self::I64 => 8,
        }
    }

    pub fn bits(&self) -> u32 {
        self.size() as u32 * 8
    }

    pub fn is_signed(&self) -> bool {
        matches!(self, Self::I8 | Self::I16 | Self::I32 | Self::I64)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
        }
    }

    /// Parse type names and their word aliases
    ///
    /// - "u8", "byte" / "i8", "sbyte"
    /// - "u16", "word" / "i16", "sword"
    /// - "u32", "fword" / "i32", "sfword"
    /// - "u64", "dfword" / "i64", "sdfword"
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "u8" | "byte" => Some(Self::U8),
            "u16" | "word" => Some(Self::U16),
            "u32" | "fword" => Some(Self::U32),
            "u64" | "dfword" => Some(Self::U64),
            "i8" | "sbyte" => Some(Self::I8),
            "i16" | "sword" => Some(Self::I16),
            "i32" | "sfword" => Some(Self::I32),
            "i64" | "sdfword" => Some(Self::I64),
            _ => None,
        }
    }
}

impl std::str::FromStr for Width {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown integer type '{}'", s))
    }
}

impl std::fmt::Display for Width {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
