//! Byte order selection for multi-byte values
//!
//! `Endian` is a parameter, not a property of the buffer. It only decides how
//! a group of bytes composes into one integer, so results are identical on
//! little- and big-endian hosts.

use serde::{Deserialize, Serialize};

/// Byte order for 16/32/64-bit values
///
/// For 32-bit value `0x12345678`:
/// - `Little`: [0x78, 0x56, 0x34, 0x12]
/// - `Big`:    [0x12, 0x34, 0x56, 0x78]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Endian {
    /// Least significant byte first
    ///
    /// Example: 0x1234 → [0x34, 0x12]
    #[default]
    #[serde(alias = "le", alias = "little_endian")]
    Little,

    /// Most significant byte first (network byte order)
    ///
    /// Example: 0x1234 → [0x12, 0x34]
    #[serde(alias = "be", alias = "big_endian", alias = "network")]
    Big,
}

impl Endian {
    /// Parse from common string forms
    ///
    /// - "little", "le", "little_endian", "little-endian" → Little
    /// - "big", "be", "big_endian", "big-endian", "network" → Big
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace('-', "_");
        match normalized.as_str() {
            "little" | "le" | "little_endian" => Some(Self::Little),
            "big" | "be" | "big_endian" | "network" => Some(Self::Big),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Little => "little",
            Self::Big => "big",
        }
    }

    pub fn is_big(&self) -> bool {
        matches!(self, Self::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Self::Little)
    }
}

impl std::str::FromStr for Endian {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| format!("unknown endianness '{}' (expected little|big)", s))
    }
}

impl std::fmt::Display for Endian {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
