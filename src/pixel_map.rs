//! Pixel to group lookup table

use alloc::string::String;
use alloc::vec::Vec;

use crate::group::{GroupId, NO_GROUP};
use crate::pixel_list::{format_pixel_list, parse_pixel_list};

/// Error returned when the lookup table cannot be allocated
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableAllocError {
    /// Requested number of pixels
    pub pixels: usize,
}

/// Group assignment for every physical pixel
///
/// Pixels that were never assigned belong to [`NO_GROUP`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PixelGroupMap {
    groups: Vec<GroupId>,
}

impl PixelGroupMap {
    /// Allocate a map for `pixels` pixels, all in the default group
    pub fn allocate(pixels: usize) -> Result<Self, TableAllocError> {
        let mut map = Self::default();
        map.resize(pixels)?;
        Ok(map)
    }

    /// Resize the map to `pixels` pixels
    ///
    /// New pixels are placed in the default group. Fails instead of
    /// aborting when memory is exhausted.
    pub fn resize(&mut self, pixels: usize) -> Result<(), TableAllocError> {
        if pixels > self.groups.len() {
            self.groups
                .try_reserve_exact(pixels - self.groups.len())
                .map_err(|_| TableAllocError { pixels })?;
        }
        self.groups.resize(pixels, NO_GROUP);
        Ok(())
    }

    /// Number of pixels covered by the map
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Group of a pixel, [`NO_GROUP`] for pixels outside the map
    #[inline]
    pub fn group_of(&self, pixel: usize) -> GroupId {
        self.groups.get(pixel).copied().unwrap_or(NO_GROUP)
    }

    /// Assign a pixel to a group
    ///
    /// Pixels outside the map are ignored.
    pub fn assign(&mut self, pixel: usize, group: GroupId) {
        if let Some(slot) = self.groups.get_mut(pixel) {
            *slot = group;
        }
    }

    /// Move every pixel back to the default group
    pub fn clear(&mut self) {
        self.groups.fill(NO_GROUP);
    }

    /// Assign every pixel of a pixel list to a group
    ///
    /// Later assignments overwrite earlier ones, including assignments made
    /// by other groups.
    pub fn apply_pixel_list(&mut self, group: GroupId, list: &str) {
        let pixel_count = self.groups.len();
        for pixel in parse_pixel_list(list, pixel_count) {
            self.assign(pixel, group);
        }
    }

    /// Pixels of a group in ascending order
    pub fn pixels_in(&self, group: GroupId) -> impl Iterator<Item = usize> + '_ {
        self.groups
            .iter()
            .enumerate()
            .filter(move |&(_, &assigned)| assigned == group)
            .map(|(pixel, _)| pixel)
    }

    /// Format the pixel list of a group
    pub fn pixel_list(&self, group: GroupId) -> String {
        format_pixel_list(self.pixels_in(group))
    }
}
