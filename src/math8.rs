/// Full scale in percent
pub const FULL_PERCENT: u8 = 100;

/// Clamp a raw percentage to the 0-100 range
#[inline]
pub const fn clamp_percent(percent: u8) -> u8 {
    if percent > FULL_PERCENT {
        FULL_PERCENT
    } else {
        percent
    }
}

/// Scale an 8-bit value by a percentage (0-100)
///
/// Truncates like integer division, so the result never exceeds `value`.
/// Percentages above 100 are treated as 100.
#[inline]
#[allow(clippy::cast_lossless, clippy::cast_possible_truncation)]
pub const fn percent8(value: u8, percent: u8) -> u8 {
    ((value as u16 * clamp_percent(percent) as u16) / FULL_PERCENT as u16) as u8
}
