//! In-memory RGBA8 rasterizer.
//!
//! [`PixelBuffer`] implements the core [`Surface`] trait, so any sampler's
//! `paint_*` function can draw into it. Pixels start fully transparent;
//! cells a sampler skips (the masked wheel corners) stay that way.

use luv_picker_core::color::Srgb;
use luv_picker_core::error::PickerError;
use luv_picker_core::surface::Surface;

/// A row-major RGBA8 pixel grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Creates a transparent buffer.
    ///
    /// Returns `PickerError::InvalidDimensions` if either dimension is zero
    /// or if `width * height * 4` overflows `usize`.
    pub fn new(width: usize, height: usize) -> Result<Self, PickerError> {
        if width == 0 || height == 0 {
            return Err(PickerError::InvalidDimensions);
        }
        let len = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(4))
            .ok_or(PickerError::InvalidDimensions)?;
        Ok(Self {
            width,
            height,
            data: vec![0; len],
        })
    }

    /// Buffer width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Read-only access to the RGBA bytes.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the buffer, returning the RGBA bytes.
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// RGBA value at `(x, y)`, or `None` outside the buffer.
    pub fn pixel(&self, x: usize, y: usize) -> Option<[u8; 4]> {
        if x >= self.width || y >= self.height {
            return None;
        }
        let i = (y * self.width + x) * 4;
        Some([
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ])
    }
}

impl Surface for PixelBuffer {
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Srgb) {
        let rgba = color.to_rgba8();
        let x_end = x.saturating_add(w).min(self.width);
        let y_end = y.saturating_add(h).min(self.height);
        for row in y.min(y_end)..y_end {
            let start = (row * self.width + x.min(x_end)) * 4;
            let end = (row * self.width + x_end) * 4;
            for px in self.data[start..end].chunks_exact_mut(4) {
                px.copy_from_slice(&rgba);
            }
        }
    }
}
