//! PNG export of a [`PixelBuffer`].
//!
//! Feature-gated behind `png` (default on) so that embedders who only need
//! the in-memory rasterizer do not pull in the `image` crate.

use luv_picker_core::error::PickerError;
use std::path::Path;

use crate::pixel::PixelBuffer;

/// Writes `buffer` as an RGBA PNG at `path`.
///
/// Returns `PickerError::InvalidDimensions` if the buffer dimensions
/// overflow `u32`, or `PickerError::Io` on write failure.
pub fn write_png(buffer: &PixelBuffer, path: &Path) -> Result<(), PickerError> {
    let w = u32::try_from(buffer.width()).map_err(|_| PickerError::InvalidDimensions)?;
    let h = u32::try_from(buffer.height()).map_err(|_| PickerError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, buffer.data().to_vec())
        .ok_or_else(|| PickerError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| PickerError::Io(e.to_string()))
}
