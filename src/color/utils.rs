use crate::{
    color::{Rgbw, White},
    math8::percent8,
};

/// Scale every channel of a color by a percentage (0-100)
#[inline]
pub fn scale_rgbw(color: Rgbw, percent: u8) -> Rgbw {
    Rgbw {
        r: percent8(color.r, percent),
        g: percent8(color.g, percent),
        b: percent8(color.b, percent),
        a: White(percent8(color.a.0, percent)),
    }
}
