//! Pixel list strings
//!
//! A pixel list is a comma-separated list of 1-based pixel indices,
//! e.g. `"1,3,5"`. Parsing is lenient: empty, non-numeric and
//! out-of-range tokens are skipped without error.

use alloc::string::String;
use core::fmt::{self, Write};

/// Token separator
pub const SEPARATOR: char = ',';

/// Parse a pixel list into 0-based pixel indices
///
/// Tokens equal to 0 or greater than `pixel_count` are ignored.
/// Input order and duplicates are preserved.
pub fn parse_pixel_list(list: &str, pixel_count: usize) -> impl Iterator<Item = usize> + '_ {
    list.split(SEPARATOR)
        .filter_map(parse_token)
        .filter(move |&pixel| pixel != 0 && pixel <= pixel_count)
        .map(|pixel| pixel - 1)
}

/// Parse a single token the way `atoi` does
///
/// Surrounding whitespace is ignored and only the leading decimal digits
/// are taken, so `" 12px"` yields 12. Returns `None` for tokens without
/// leading digits or values that overflow.
fn parse_token(token: &str) -> Option<usize> {
    let token = token.trim();
    let digits = token
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(token.len());
    if digits == 0 {
        return None;
    }
    token[..digits].parse().ok()
}

/// Write 0-based pixel indices as a 1-based pixel list
pub fn write_pixel_list<W: Write>(
    out: &mut W,
    pixels: impl IntoIterator<Item = usize>,
) -> fmt::Result {
    for (i, pixel) in pixels.into_iter().enumerate() {
        if i > 0 {
            out.write_char(SEPARATOR)?;
        }
        write!(out, "{}", pixel + 1)?;
    }
    Ok(())
}

/// Format 0-based pixel indices as a 1-based pixel list
pub fn format_pixel_list(pixels: impl IntoIterator<Item = usize>) -> String {
    let mut formatted = String::new();
    // Writing into a `String` cannot fail
    let _ = write_pixel_list(&mut formatted, pixels);
    formatted
}
