//! Persistent settings record
//!
//! Mirrors the JSON object stored under the module name in the host's
//! configuration file. Every field is optional so partially written or
//! hand-edited configurations still load.

use alloc::string::String;

use heapless::String as BoundedString;
use serde::{Deserialize, Serialize};

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::group::GroupId;

/// Settings object key in the host configuration
pub const MODULE_NAME: &str = "BrightnessGroups";

/// Field names of a group object
pub const FIELD_SCALE: &str = "scale";
pub const FIELD_PIXELS: &str = "pixels";
pub const GROUP_PREFIX: &str = "group";

/// Settings codec error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsError {
    /// Input is not a valid settings object
    Parse,
    /// Output buffer is too small
    Serialize,
}

/// Settings of a single group
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupSettings {
    /// Brightness scale in percent, clamped to 100 on load
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scale: Option<u8>,
    /// Pixel list, e.g. `"1,3,5"`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pixels: Option<String>,
}

impl GroupSettings {
    pub fn new(scale: u8, pixels: impl Into<String>) -> Self {
        Self {
            scale: Some(scale),
            pixels: Some(pixels.into()),
        }
    }
}

/// Brightness groups settings record
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrightnessGroupsSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group1: Option<GroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group2: Option<GroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group3: Option<GroupSettings>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub group4: Option<GroupSettings>,
}

impl BrightnessGroupsSettings {
    /// Parse a settings object from JSON
    pub fn from_json(json: &[u8]) -> Result<Self, SettingsError> {
        let (settings, _) = serde_json_core::from_slice(json).map_err(|_e| {
            #[cfg(feature = "esp32-log")]
            println!("[BrightnessGroupsSettings.from_json] parse error: {:?}", _e);
            SettingsError::Parse
        })?;
        Ok(settings)
    }

    /// Serialize the settings object to JSON
    pub fn to_json<const N: usize>(&self) -> Result<BoundedString<N>, SettingsError> {
        serde_json_core::to_string(self).map_err(|_| SettingsError::Serialize)
    }

    /// Settings of a configurable group
    pub fn group(&self, group: GroupId) -> Option<&GroupSettings> {
        match group {
            1 => self.group1.as_ref(),
            2 => self.group2.as_ref(),
            3 => self.group3.as_ref(),
            4 => self.group4.as_ref(),
            _ => None,
        }
    }

    /// Mutable slot for a configurable group
    pub fn group_slot(&mut self, group: GroupId) -> Option<&mut Option<GroupSettings>> {
        match group {
            1 => Some(&mut self.group1),
            2 => Some(&mut self.group2),
            3 => Some(&mut self.group3),
            4 => Some(&mut self.group4),
            _ => None,
        }
    }

    /// Check that every field is present
    pub fn is_complete(&self) -> bool {
        self.enabled.is_some()
            && [&self.group1, &self.group2, &self.group3, &self.group4]
                .iter()
                .all(|group| {
                    group
                        .as_ref()
                        .is_some_and(|group| group.scale.is_some() && group.pixels.is_some())
                })
    }
}
