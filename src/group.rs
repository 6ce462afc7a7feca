//! Brightness groups and their scale table
//!
//! Group 0 is the implicit "no group" bucket. It always scales by 100%,
//! so pixels that were never assigned pass through unchanged.

use crate::math8::{FULL_PERCENT, clamp_percent};

/// Highest configurable group id
pub const LAST_GROUP: GroupId = 4;

/// Number of configurable groups
pub const MAX_GROUPS: usize = LAST_GROUP as usize;

/// Group id of pixels that belong to no group
pub const NO_GROUP: GroupId = 0;

/// Scale applied to groups without a configured value
pub const DEFAULT_SCALE: u8 = FULL_PERCENT;

/// Group id, `0..=MAX_GROUPS`
pub type GroupId = u8;

/// Iterate over the configurable group ids in processing order
pub fn configurable_groups() -> impl Iterator<Item = GroupId> {
    1..=LAST_GROUP
}

/// Scale percentages for every group
///
/// Values never exceed 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupTable {
    scales: [u8; MAX_GROUPS + 1],
}

impl GroupTable {
    /// Create a table with every group at full scale
    pub const fn new() -> Self {
        Self {
            scales: [DEFAULT_SCALE; MAX_GROUPS + 1],
        }
    }

    /// Get the scale of a group
    ///
    /// Unknown group ids scale by 100%.
    pub fn scale(&self, group: GroupId) -> u8 {
        self.scales
            .get(usize::from(group))
            .copied()
            .unwrap_or(DEFAULT_SCALE)
    }

    /// Set the scale of a configurable group, clamped to 100
    ///
    /// Group 0 and unknown ids are ignored.
    pub fn set_scale(&mut self, group: GroupId, scale: u8) {
        if group == NO_GROUP {
            return;
        }
        if let Some(slot) = self.scales.get_mut(usize::from(group)) {
            *slot = clamp_percent(scale);
        }
    }
}

impl Default for GroupTable {
    fn default() -> Self {
        Self::new()
    }
}
