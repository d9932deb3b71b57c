//! Integer formatting with digit grouping
//!
//! Uses `itoa` for the digits. Each call owns its own `itoa::Buffer`, so
//! there is no shared formatter state between callers or threads.
//!
//! # Usage
//!
//! ```rust
//! use bytekit::numfmt::{format_grouped, format_with_separator};
//!
//! assert_eq!(format_grouped(1234567u32), "1,234,567");
//! assert_eq!(format_with_separator(-9876543i64, "_"), "-9_876_543");
//! ```

/// Format `value` with `separator` between groups of three digits
pub fn format_with_separator<I: itoa::Integer>(value: I, separator: &str) -> String {
    let mut buffer = itoa::Buffer::new();
    let formatted = buffer.format(value);

    let (sign, digits) = match formatted.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", formatted),
    };

    let groups = digits.len().div_ceil(3);
    let mut out = String::with_capacity(sign.len() + digits.len() + groups * separator.len());
    out.push_str(sign);

    let head = digits.len() - (groups - 1) * 3;
    out.push_str(&digits[..head]);
    for start in (head..digits.len()).step_by(3) {
        out.push_str(separator);
        out.push_str(&digits[start..start + 3]);
    }

    out
}

/// Format `value` with `,` as the thousands separator
#[inline]
pub fn format_grouped<I: itoa::Integer>(value: I) -> String {
    format_with_separator(value, ",")
}
