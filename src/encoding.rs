//! UTF-8 handling for byte input.

use simdutf8::compat::from_utf8;

use crate::error::{Result, SnifferError};

/// Check if the data starts with a UTF-8 BOM (Byte Order Mark).
///
/// The UTF-8 BOM is the byte sequence: EF BB BF
pub fn has_utf8_bom(data: &[u8]) -> bool {
    data.starts_with(&[0xEF, 0xBB, 0xBF])
}

/// Skip the UTF-8 BOM if present and return the remaining data.
pub fn skip_bom(data: &[u8]) -> &[u8] {
    if has_utf8_bom(data) { &data[3..] } else { data }
}

/// Strip a BOM and view the rest as text, using SIMD-accelerated validation.
pub fn decode_utf8(data: &[u8]) -> Result<&str> {
    from_utf8(skip_bom(data)).map_err(|e| SnifferError::InvalidUtf8 {
        valid_up_to: e.valid_up_to(),
    })
}
