//! Frame output seam
//!
//! The host renders a frame and keeps its own timing. This wrapper lets the
//! extension adjust the rendered frame and then hands it to the driver.

use crate::OutputDriver;
use crate::extension::Extension;

/// Output driver with an extension in front of it
///
/// # Usage
///
/// ```ignore
/// let mut output = FrameOutput::new(driver, BrightnessGroups::new());
/// output.extension_mut().on_config_load(&settings, &frame[..]);
/// output.boot();
///
/// loop {
///     render_effects(&mut frame);
///     output.present(&mut frame);
///     sleep_until_next_frame();
/// }
/// ```
pub struct FrameOutput<O: OutputDriver, X: Extension> {
    output: O,
    extension: X,
}

impl<O: OutputDriver, X: Extension> FrameOutput<O, X> {
    pub const fn new(driver: O, extension: X) -> Self {
        Self {
            output: driver,
            extension,
        }
    }

    /// Run the extension boot hook.
    pub fn boot(&mut self) {
        self.extension.on_boot();
    }

    /// Adjust the rendered frame in place and write it to the driver.
    pub fn present(&mut self, frame: &mut [u32]) {
        self.extension.on_frame(&mut *frame);
        self.output.write(frame);
    }

    /// Get a reference to the extension.
    pub fn extension(&self) -> &X {
        &self.extension
    }

    /// Get a mutable reference to the extension.
    pub fn extension_mut(&mut self) -> &mut X {
        &mut self.extension
    }

    /// Get a reference to the output driver.
    pub fn output(&self) -> &O {
        &self.output
    }
}
