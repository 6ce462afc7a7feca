use crate::color::{Rgbw, White};

/// Create an RGBW color from a u32 value (0xWWRRGGBB format)
pub const fn rgbw_from_u32(color: u32) -> Rgbw {
    Rgbw {
        r: ((color >> 16) & 0xFF) as u8,
        g: ((color >> 8) & 0xFF) as u8,
        b: (color & 0xFF) as u8,
        a: White(((color >> 24) & 0xFF) as u8),
    }
}

/// Pack an RGBW color into a u32 value (0xWWRRGGBB format)
#[allow(clippy::cast_lossless)]
pub const fn rgbw_to_u32(color: Rgbw) -> u32 {
    ((color.a.0 as u32) << 24) | ((color.r as u32) << 16) | ((color.g as u32) << 8) | color.b as u32
}

/// Build a packed color from separate channels
pub const fn pack_rgbw(r: u8, g: u8, b: u8, w: u8) -> u32 {
    rgbw_to_u32(Rgbw { r, g, b, a: White(w) })
}
