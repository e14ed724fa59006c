#![deny(unsafe_code)]
//! Rasterization for the luv-picker: paints sampler output into RGBA pixel
//! buffers and writes PNG snapshots.
//!
//! This crate sits between `luv-picker-core` (pure sampling) and the CLI.
//! Each `render_*` function allocates a buffer sized for one picker widget
//! and drives the matching core `paint_*` function into it.

pub mod pixel;

#[cfg(feature = "png")]
pub mod snapshot;

use luv_picker_core::color::Srgb;
use luv_picker_core::error::PickerError;
use luv_picker_core::palette::{paint_palette, PaletteMatrix};
use luv_picker_core::session::Frame;
use luv_picker_core::spectrum::{paint_spectrum, SpectrumSample, StripGeometry};
use luv_picker_core::surface::Surface;
use luv_picker_core::wheel::{paint_wheel, WheelGeometry, WheelSample};

pub use pixel::PixelBuffer;

/// Renders wheel samples onto a `width` x `height` buffer.
pub fn render_wheel(
    samples: &[WheelSample],
    geometry: &WheelGeometry,
) -> Result<PixelBuffer, PickerError> {
    geometry.validate()?;
    let mut buffer = PixelBuffer::new(geometry.width, geometry.height)?;
    paint_wheel(samples, geometry, &mut buffer);
    Ok(buffer)
}

/// Renders one spectrum strip.
pub fn render_spectrum(
    samples: &[SpectrumSample],
    geometry: &StripGeometry,
) -> Result<PixelBuffer, PickerError> {
    geometry.validate()?;
    let mut buffer = PixelBuffer::new(geometry.length, geometry.height)?;
    paint_spectrum(samples, geometry, &mut buffer);
    Ok(buffer)
}

/// Renders the palette matrix with square swatches of `cell_size` pixels.
pub fn render_palette(
    matrix: &PaletteMatrix,
    cell_size: usize,
) -> Result<PixelBuffer, PickerError> {
    let side = matrix
        .size()
        .checked_mul(cell_size)
        .ok_or(PickerError::InvalidDimensions)?;
    let mut buffer = PixelBuffer::new(side, side)?;
    paint_palette(matrix, cell_size, &mut buffer);
    Ok(buffer)
}

/// Renders a horizontal row of square swatches, one per color.
pub fn render_swatches(colors: &[Srgb], swatch_size: usize) -> Result<PixelBuffer, PickerError> {
    let width = colors
        .len()
        .checked_mul(swatch_size)
        .ok_or(PickerError::InvalidDimensions)?;
    let mut buffer = PixelBuffer::new(width, swatch_size)?;
    for (i, &color) in colors.iter().enumerate() {
        buffer.fill_rect(i * swatch_size, 0, swatch_size, swatch_size, color);
    }
    Ok(buffer)
}

/// Renders the three spectrum strips of a frame stacked top to bottom in
/// hue, saturation, light order.
pub fn render_spectra(frame: &Frame, geometry: &StripGeometry) -> Result<PixelBuffer, PickerError> {
    geometry.validate()?;
    let height = geometry
        .height
        .checked_mul(3)
        .ok_or(PickerError::InvalidDimensions)?;
    let mut buffer = PixelBuffer::new(geometry.length, height)?;
    let strips = [
        &frame.hue_spectrum,
        &frame.saturation_spectrum,
        &frame.light_spectrum,
    ];
    for (row, samples) in strips.into_iter().enumerate() {
        let top = row * geometry.height;
        for s in samples.iter() {
            buffer.fill_rect(s.offset, top, s.width, geometry.height, s.color);
        }
    }
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use luv_picker_core::config::PickerConfig;
    use luv_picker_core::palette::{palette_matrix, PaletteConfig};
    use luv_picker_core::session::Session;
    use luv_picker_core::spectrum::sample_spectrum;
    use luv_picker_core::state::{Channel, PickerState};
    use luv_picker_core::transform::Hpluv;
    use luv_picker_core::wheel::{sample_wheel, WheelPolicy};

    #[test]
    fn clamped_wheel_covers_every_pixel() {
        let g = WheelGeometry::new(40, 40, 4).unwrap();
        let samples = sample_wheel(&g, 80.0, WheelPolicy::Clamp, &Hpluv);
        let buf = render_wheel(&samples, &g).unwrap();
        assert!(buf.data().chunks(4).all(|p| p[3] == 255));
    }

    #[test]
    fn masked_wheel_leaves_corners_transparent() {
        let g = WheelGeometry::new(40, 40, 4).unwrap();
        let samples = sample_wheel(&g, 80.0, WheelPolicy::Mask, &Hpluv);
        let buf = render_wheel(&samples, &g).unwrap();
        assert_eq!(buf.pixel(0, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(20, 20).map(|p| p[3]), Some(255));
    }

    #[test]
    fn wheel_canvas_wider_than_grid_keeps_remainder_blank() {
        // 42 / 4 = 10 cells; the last two pixel columns are never painted.
        let g = WheelGeometry::new(42, 40, 4).unwrap();
        let samples = sample_wheel(&g, 50.0, WheelPolicy::Clamp, &Hpluv);
        let buf = render_wheel(&samples, &g).unwrap();
        assert_eq!(buf.width(), 42);
        assert_eq!(buf.pixel(41, 0), Some([0, 0, 0, 0]));
        assert_eq!(buf.pixel(39, 0).map(|p| p[3]), Some(255));
    }

    #[test]
    fn spectrum_columns_are_uniform_top_to_bottom() {
        let g = StripGeometry::new(30, 6, 1).unwrap();
        let samples = sample_spectrum(Channel::Hue, &PickerState::default(), &g, &Hpluv);
        let buf = render_spectrum(&samples, &g).unwrap();
        for x in 0..30 {
            let top = buf.pixel(x, 0);
            assert!((1..6).all(|y| buf.pixel(x, y) == top));
        }
        assert_eq!(buf.pixel(0, 0), Some(samples[0].color.to_rgba8()));
    }

    #[test]
    fn palette_render_is_size_times_cell() {
        let config = PaletteConfig::new(3, 30.0, 30.0).unwrap();
        let m = palette_matrix(&PickerState::default(), &config, &Hpluv);
        let buf = render_palette(&m, 10).unwrap();
        assert_eq!((buf.width(), buf.height()), (30, 30));
        assert_eq!(
            buf.pixel(25, 5),
            Some(m.get(0, 2).unwrap().color.to_rgba8())
        );
    }

    #[test]
    fn swatches_lay_out_left_to_right() {
        let colors = [
            Srgb::from_hex("#ff0000").unwrap(),
            Srgb::from_hex("#00ff00").unwrap(),
        ];
        let buf = render_swatches(&colors, 5).unwrap();
        assert_eq!((buf.width(), buf.height()), (10, 5));
        assert_eq!(buf.pixel(7, 2), Some([0, 255, 0, 255]));
        assert!(render_swatches(&[], 5).is_err());
    }

    #[test]
    fn spectra_stack_three_strips() {
        let config = PickerConfig {
            spectrum: StripGeometry::new(20, 4, 1).unwrap(),
            ..PickerConfig::default()
        };
        let session = Session::new(&config).unwrap();
        let buf = render_spectra(session.frame(), &config.spectrum).unwrap();
        assert_eq!(buf.height(), 12);
        assert_eq!(
            buf.pixel(10, 9),
            Some(session.frame().light_spectrum[10].color.to_rgba8())
        );
    }
}
