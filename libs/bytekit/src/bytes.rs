//! Binary buffer codec
//!
//! Interprets caller-owned byte buffers as fixed-width integers, bits and
//! bit-fields, with explicit endianness.
//!
//! # Design Principles
//!
//! - **Host-independent**: `Endian` describes how bytes compose into values,
//!   never the CPU byte order
//! - **Type-safe**: `FixedWidth` is sealed to the eight integer types
//! - **No unsafe**: every read goes through a bounds-checked slice
//! - **Three leniency policies**: reads fail, bit access degrades, writes clamp

pub mod bit_ops;
pub mod buffer;
pub mod conversions;
pub mod endian;
pub mod integer;

pub use bit_ops::*;
pub use buffer::*;
pub use conversions::*;
pub use endian::Endian;
pub use integer::{FixedWidth, Width};
