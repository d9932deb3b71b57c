//! bytekit - Typed Binary Buffer Codec
//!
//! Reads and writes fixed-width integers and bit-fields inside caller-owned
//! byte buffers.
//!
//! # Architecture
//!
//! This library provides:
//! - **Bytes Codec**: bounded integer reads, clamped writes, bit access, array decoding
//! - **Hex/Text**: hex encoding and dumps, ASCII/UTF-8/UTF-16 decoding
//! - **Helpers**: thousands-separator formatting, optional defaulting, a debounce timer
//!
//! # Leniency policies
//!
//! | Operation              | Out of range behaviour           |
//! |------------------------|----------------------------------|
//! | multi-byte read        | `CodecError::OutOfBounds`        |
//! | single bit read/twiddle| `false` / unchanged value        |
//! | integer write          | offset clamped into the buffer   |

pub mod bytes;
pub mod debounce;
pub mod error;
pub mod hex;
pub mod numfmt;
pub mod option;
pub mod text;

// Re-export core types
pub use bytes::{ByteBufferExt, Endian, FixedWidth, Width};
pub use debounce::Debouncer;
pub use error::{CodecError, Result};
