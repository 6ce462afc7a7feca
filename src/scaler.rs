//! Per-group brightness scaler
//!
//! Runs after the rendering pipeline has produced a frame and before the
//! frame is transmitted. Every pixel is scaled by the brightness of the
//! group it belongs to.

use core::fmt;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::PixelStrip;
use crate::color::{rgbw_from_u32, rgbw_to_u32, scale_rgbw};
use crate::config_page::write_config_info;
use crate::extension::Extension;
use crate::group::{DEFAULT_SCALE, GroupId, GroupTable, NO_GROUP, configurable_groups};
use crate::math8::FULL_PERCENT;
use crate::pixel_map::{PixelGroupMap, TableAllocError};
use crate::settings::{BrightnessGroupsSettings, GroupSettings};

/// Module identifier reported to the host
pub const BRIGHTNESS_GROUPS_ID: u16 = 46;

/// Brightness groups extension
///
/// The pixel lookup table is allocated on the first settings load. Until
/// then the frame pass does nothing.
#[derive(Debug, Clone, Default)]
pub struct BrightnessGroups {
    enabled: bool,
    scales: GroupTable,
    pixels: Option<PixelGroupMap>,
}

impl BrightnessGroups {
    /// Create a disabled, uninitialized extension
    pub const fn new() -> Self {
        Self {
            enabled: false,
            scales: GroupTable::new(),
            pixels: None,
        }
    }

    /// Enable or disable the frame pass
    pub fn enable(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub const fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Check if the lookup table is ready
    pub const fn is_initialized(&self) -> bool {
        self.pixels.is_some()
    }

    /// Scale of a group in percent
    pub fn scale(&self, group: GroupId) -> u8 {
        self.scales.scale(group)
    }

    /// Set the scale of a configurable group, clamped to 100
    pub fn set_scale(&mut self, group: GroupId, scale: u8) {
        self.scales.set_scale(group, scale);
    }

    /// Group a pixel belongs to
    pub fn group_of(&self, pixel: usize) -> GroupId {
        self.pixels
            .as_ref()
            .map_or(NO_GROUP, |map| map.group_of(pixel))
    }

    /// Lookup table, if allocated
    pub fn pixel_map(&self) -> Option<&PixelGroupMap> {
        self.pixels.as_ref()
    }

    /// Boot hook, only reports the loaded state
    ///
    /// Group 0 cannot leave full scale, so there is nothing to initialize.
    #[allow(clippy::unused_self)]
    pub fn setup(&self) {
        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessGroups.setup] enabled: {:?}, initialized: {:?}",
            self.enabled,
            self.is_initialized()
        );
    }

    /// Load settings, reporting allocation failures
    ///
    /// Returns `Ok(false)` when any field was missing and a default was
    /// used in its place.
    pub fn load_settings<S: PixelStrip + ?Sized>(
        &mut self,
        settings: &BrightnessGroupsSettings,
        strip: &S,
    ) -> Result<bool, TableAllocError> {
        let mut complete = settings.enabled.is_some();
        self.enabled = settings.enabled.unwrap_or(false);

        let map = match prepare_map(&mut self.pixels, strip.physical_len()) {
            Ok(map) => map,
            Err(err) => {
                #[cfg(feature = "esp32-log")]
                println!(
                    "[BrightnessGroups.load_settings] lookup table allocation failed for {:?} pixels",
                    err.pixels
                );
                return Err(err);
            }
        };

        for group in configurable_groups() {
            let group_settings = settings.group(group);
            let scale = group_settings.and_then(|group| group.scale);
            let pixels = group_settings.and_then(|group| group.pixels.as_deref());
            complete &= scale.is_some() && pixels.is_some();

            self.scales.set_scale(group, scale.unwrap_or(DEFAULT_SCALE));
            map.apply_pixel_list(group, pixels.unwrap_or_default());
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[BrightnessGroups.load_settings] loaded {:?} pixels, complete: {:?}",
            map.len(),
            complete
        );

        Ok(complete)
    }

    /// Load settings
    ///
    /// Returns `false` if the record was incomplete or the lookup table
    /// could not be allocated.
    pub fn read_from_config<S: PixelStrip + ?Sized>(
        &mut self,
        settings: &BrightnessGroupsSettings,
        strip: &S,
    ) -> bool {
        self.load_settings(settings, strip).unwrap_or(false)
    }

    /// Produce the settings record from the current state
    ///
    /// Pixel lists are regenerated from the lookup table in ascending order.
    pub fn add_to_config(&self) -> BrightnessGroupsSettings {
        let mut settings = BrightnessGroupsSettings {
            enabled: Some(self.enabled),
            ..BrightnessGroupsSettings::default()
        };
        for group in configurable_groups() {
            let pixels = self
                .pixels
                .as_ref()
                .map(|map| map.pixel_list(group))
                .unwrap_or_default();
            if let Some(slot) = settings.group_slot(group) {
                *slot = Some(GroupSettings::new(self.scales.scale(group), pixels));
            }
        }
        settings
    }

    /// Scale every pixel of the strip by its group brightness
    pub fn handle_overlay_draw<S: PixelStrip + ?Sized>(&self, strip: &mut S) {
        if !self.enabled {
            return;
        }
        let Some(map) = &self.pixels else {
            return;
        };

        for pixel in 0..strip.physical_len() {
            let scale = self.scales.scale(map.group_of(pixel));
            if scale == FULL_PERCENT {
                continue;
            }
            let color = rgbw_from_u32(strip.pixel_color(pixel));
            strip.set_pixel_color(pixel, rgbw_to_u32(scale_rgbw(color, scale)));
        }
    }

    /// Write settings page help text
    pub fn append_config_data<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        write_config_info(out)
    }
}

/// Allocate the lookup table on first use and match it to the strip length
///
/// Membership is cleared so the loaded pixel lists fully describe it.
fn prepare_map(
    slot: &mut Option<PixelGroupMap>,
    pixel_count: usize,
) -> Result<&mut PixelGroupMap, TableAllocError> {
    let resized = match slot.take() {
        Some(mut map) => map.resize(pixel_count).map(|()| map),
        None => PixelGroupMap::allocate(pixel_count),
    };
    let map = slot.insert(resized?);
    map.clear();
    Ok(map)
}

impl Extension for BrightnessGroups {
    type Settings = BrightnessGroupsSettings;

    fn id(&self) -> u16 {
        BRIGHTNESS_GROUPS_ID
    }

    fn on_boot(&mut self) {
        self.setup();
    }

    fn on_config_load<S: PixelStrip + ?Sized>(
        &mut self,
        settings: &Self::Settings,
        strip: &S,
    ) -> bool {
        self.read_from_config(settings, strip)
    }

    fn on_config_save(&self) -> Self::Settings {
        self.add_to_config()
    }

    fn on_frame<S: PixelStrip + ?Sized>(&mut self, strip: &mut S) {
        self.handle_overlay_draw(strip);
    }

    fn append_config_info<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.append_config_data(out)
    }
}
