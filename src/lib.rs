#![no_std]

extern crate alloc;

pub mod color;
pub mod config_page;
pub mod extension;
pub mod frame_output;
pub mod group;
pub mod math8;
pub mod pixel_list;
pub mod pixel_map;
pub mod scaler;
pub mod settings;

pub use extension::Extension;
pub use frame_output::FrameOutput;
pub use group::{GroupId, GroupTable, MAX_GROUPS, NO_GROUP};
pub use pixel_map::{PixelGroupMap, TableAllocError};
pub use scaler::{BRIGHTNESS_GROUPS_ID, BrightnessGroups};
pub use settings::{BrightnessGroupsSettings, GroupSettings, SettingsError};

pub use color::{Rgbw, pack_rgbw, rgbw_from_u32, rgbw_to_u32};
pub use math8::percent8;

/// Abstract LED driver trait
///
/// Implement this trait to support different hardware platforms.
pub trait OutputDriver {
    /// Write packed colors to the LED strip
    fn write(&mut self, colors: &[u32]);
}

/// Physical pixel buffer of the host
///
/// Colors are packed as `0xWWRRGGBB`. Indices are 0-based.
pub trait PixelStrip {
    /// Number of physical pixels
    fn physical_len(&self) -> usize;

    /// Get the packed color of a pixel
    fn pixel_color(&self, index: usize) -> u32;

    /// Set the packed color of a pixel
    fn set_pixel_color(&mut self, index: usize, color: u32);
}

impl PixelStrip for [u32] {
    fn physical_len(&self) -> usize {
        self.len()
    }

    fn pixel_color(&self, index: usize) -> u32 {
        self.get(index).copied().unwrap_or_default()
    }

    fn set_pixel_color(&mut self, index: usize, color: u32) {
        if let Some(pixel) = self.get_mut(index) {
            *pixel = color;
        }
    }
}
