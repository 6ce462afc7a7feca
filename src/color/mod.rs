mod packed;
mod utils;

use smart_leds::RGBW;
pub use smart_leds::White;

pub use packed::{pack_rgbw, rgbw_from_u32, rgbw_to_u32};
pub use utils::scale_rgbw;

pub type Rgbw = RGBW<u8>;
