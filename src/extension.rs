//! Host extension points
//!
//! The host drives every extension from a single control loop through
//! these named callbacks: once at boot, on every configuration load and
//! save, and once per rendered frame right before transmission.

use core::fmt;

use crate::PixelStrip;

/// Capability interface of an extension invoked by the host loop
pub trait Extension {
    /// Persistent settings record of the extension
    type Settings;

    /// Fixed identifier used for host-side discovery
    fn id(&self) -> u16;

    /// Called once at boot, after the first configuration load
    ///
    /// Purely informational for extensions that do all their setup in
    /// `on_config_load`.
    fn on_boot(&mut self) {}

    /// Load settings
    ///
    /// Returns `false` when the record was incomplete or could not be
    /// applied, so the host persists the defaults back.
    fn on_config_load<S: PixelStrip + ?Sized>(
        &mut self,
        settings: &Self::Settings,
        strip: &S,
    ) -> bool;

    /// Produce the settings record to persist
    fn on_config_save(&self) -> Self::Settings;

    /// Adjust the rendered frame in place before it is transmitted
    fn on_frame<S: PixelStrip + ?Sized>(&mut self, strip: &mut S);

    /// Emit settings page metadata
    fn append_config_info<W: fmt::Write>(&self, _out: &mut W) -> fmt::Result {
        Ok(())
    }
}
