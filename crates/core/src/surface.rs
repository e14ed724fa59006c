//! Write-only raster target the samplers paint into.
//!
//! Painting functions take the surface as an explicit `&mut dyn Surface`
//! argument for the duration of one call; nothing in the core holds on to a
//! surface between calls.

use crate::color::Srgb;

/// Receives rectangle fills in pixel coordinates.
///
/// Each frame overwrites the previous one entirely; there is no read-back.
/// The trait is object-safe.
pub trait Surface {
    /// Fills the `w` x `h` rectangle whose top-left corner is `(x, y)`.
    /// Implementations clip anything that falls outside their bounds.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Srgb);
}

/// A surface that records every fill. Useful for tests and for callers that
/// forward fills to another rasterizer later.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FillLog {
    pub fills: Vec<Fill>,
}

/// One recorded `fill_rect` call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fill {
    pub x: usize,
    pub y: usize,
    pub w: usize,
    pub h: usize,
    pub color: Srgb,
}

impl Surface for FillLog {
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Srgb) {
        self.fills.push(Fill { x, y, w, h, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fill_log_records_calls_in_order() {
        let red = Srgb {
            r: 1.0,
            g: 0.0,
            b: 0.0,
        };
        let mut log = FillLog::default();
        {
            let surface: &mut dyn Surface = &mut log;
            surface.fill_rect(0, 0, 4, 4, red);
            surface.fill_rect(4, 0, 4, 4, red);
        }
        assert_eq!(log.fills.len(), 2);
        assert_eq!(log.fills[1].x, 4);
        assert_eq!(log.fills[1].color, red);
    }
}
