//! # Latin-1 Encoding
//!
//! Converts the receipt buffer into single-byte output for the printer.
//!
//! Command parameters and receipt text are both kept in U+0000–U+00FF, which
//! maps one-to-one onto ISO-8859-1 bytes. Text is run through
//! [`strip_diacritics`](crate::layout::strip_diacritics) before it reaches the
//! buffer, so characters above U+00FF only show up for symbols the caller
//! passed in verbatim. Those are replaced with `?`.

use tracing::warn;

/// Encode a string as Latin-1 bytes.
///
/// - U+0000–U+00FF: passed through as the byte of the same value
/// - Everything else: replaced with `?` and logged
pub fn encode(s: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(s.len());
    for ch in s.chars() {
        match u8::try_from(u32::from(ch)) {
            Ok(byte) => out.push(byte),
            Err(_) => {
                warn!(
                    character = %ch,
                    code_point = %format!("U+{:04X}", ch as u32),
                    "unmapped character, replacing with '?'"
                );
                out.push(b'?');
            }
        }
    }
    out
}
