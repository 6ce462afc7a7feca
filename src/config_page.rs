//! Settings page metadata
//!
//! Emits `addInfo(...)` script calls that the host's settings page uses to
//! render help text next to each field.

use core::fmt::{self, Write};

use crate::group::{GroupId, configurable_groups};
use crate::settings::{FIELD_PIXELS, FIELD_SCALE, GROUP_PREFIX, MODULE_NAME};

const SCALE_INFO: &str = "<i>Local brightness value for each group between 0 and 100.</i>";
const PIXELS_INFO: &str = "Associated group for each physical pixel. \
    Invalid or no group # will result in no impact on the pixel brightness.";

/// Write a single help entry for a group field
pub fn write_field_info<W: Write>(
    out: &mut W,
    group: GroupId,
    field: &str,
    info: &str,
) -> fmt::Result {
    write!(
        out,
        "addInfo('{}:{}{}:{}',1,'{}');",
        MODULE_NAME, GROUP_PREFIX, group, field, info
    )
}

/// Write help entries for every configurable field
pub fn write_config_info<W: Write>(out: &mut W) -> fmt::Result {
    for group in configurable_groups() {
        write_field_info(out, group, FIELD_SCALE, SCALE_INFO)?;
        write_field_info(out, group, FIELD_PIXELS, PIXELS_INFO)?;
    }
    Ok(())
}
