//! bytescope configuration
//!
//! Loaded through `common::load_config`: defaults, `config/bytescope.*`,
//! `--config <file>`, then `BYTESCOPE_*` environment variables.

use bytekit::hex::DEFAULT_DUMP_WIDTH;
use bytekit::Endian;
use common::LogFormat;
use serde::{Deserialize, Serialize};

pub const APP_NAME: &str = "bytescope";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ScopeConfig {
    /// Byte order for integer reads
    pub endian: Endian,
    /// Bytes per hex dump line
    pub hex_width: usize,
    /// Uppercase hex digits in dumps
    pub uppercase_hex: bool,
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Default for ScopeConfig {
    fn default() -> Self {
        Self {
            endian: Endian::Little,
            hex_width: DEFAULT_DUMP_WIDTH,
            uppercase_hex: false,
            log_level: "warn".to_string(),
            log_format: LogFormat::Compact,
        }
    }
}
