//! Palette matrix: an N x N grid derived from one base color.
//!
//! Columns sweep the full hue circle centered on the base hue. Rows spread
//! saturation around the base value and light in the opposite direction.
//! Saturation and light are capped at 100 but deliberately not floored at
//! 0, so extreme variations can produce negative channel values in the
//! matrix; those are clamped only at the transform boundary.

use serde::{Deserialize, Serialize};

use crate::color::Srgb;
use crate::error::PickerError;
use crate::state::PickerState;
use crate::surface::Surface;
use crate::transform::{convert_normalized, ColorTransform};

/// Largest accepted palette size.
pub const MAX_PALETTE_SIZE: usize = 100;

/// Size and row-wise spread of the palette matrix.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub size: usize,
    pub saturation_variation: f64,
    pub light_variation: f64,
}

impl Default for PaletteConfig {
    fn default() -> Self {
        Self {
            size: 5,
            saturation_variation: 50.0,
            light_variation: 50.0,
        }
    }
}

impl PaletteConfig {
    /// Creates a validated config.
    pub fn new(
        size: usize,
        saturation_variation: f64,
        light_variation: f64,
    ) -> Result<Self, PickerError> {
        let config = Self {
            size,
            saturation_variation,
            light_variation,
        };
        config.validate()?;
        Ok(config)
    }

    /// Checks size in `[1, 100]` and both variations in `[0, 100]`.
    pub fn validate(&self) -> Result<(), PickerError> {
        if !(1..=MAX_PALETTE_SIZE).contains(&self.size) {
            return Err(PickerError::InvalidPaletteSize(self.size));
        }
        for (name, value) in [
            ("saturation_variation", self.saturation_variation),
            ("light_variation", self.light_variation),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(PickerError::InvalidVariation {
                    name: name.to_string(),
                    value,
                });
            }
        }
        Ok(())
    }
}

/// One cell of the matrix with the channel values it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PaletteCell {
    pub hue: f64,
    pub saturation: f64,
    pub light: f64,
    pub color: Srgb,
}

/// A `size` x `size` matrix, row-major. Rows vary saturation/light,
/// columns vary hue. The default is the empty 0 x 0 matrix.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PaletteMatrix {
    size: usize,
    cells: Vec<PaletteCell>,
}

impl PaletteMatrix {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Cell at row `i`, column `j`, or `None` when out of range.
    pub fn get(&self, i: usize, j: usize) -> Option<&PaletteCell> {
        if i >= self.size || j >= self.size {
            return None;
        }
        self.cells.get(i * self.size + j)
    }

    /// Iterates the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &[PaletteCell]> {
        self.cells.chunks(self.size.max(1))
    }

    /// All cells, row-major.
    pub fn cells(&self) -> &[PaletteCell] {
        &self.cells
    }

    /// Hex strings laid out as rows.
    pub fn to_hex_rows(&self) -> Vec<Vec<String>> {
        self.rows()
            .map(|row| row.iter().map(|c| c.color.to_hex()).collect())
            .collect()
    }
}

/// Channel values of cell `(i, j)`:
///
/// - `hue = floor(base_hue + (360 / size) * (j - size / 2)) mod 360`
/// - `sat = min(floor(base_sat + (sat_var / (size + 1)) * (i + 1 - size / 2)), 100)`
/// - `light = min(floor(base_light - (light_var / (size + 1)) * (i + 1 - size / 2)), 100)`
///
/// `size / 2` is real division, so odd sizes are centered between columns.
pub fn cell_channels(
    base: &PickerState,
    config: &PaletteConfig,
    i: usize,
    j: usize,
) -> (f64, f64, f64) {
    let n = config.size as f64;
    let half = n / 2.0;
    let row_step = i as f64 + 1.0 - half;

    let hue = (base.hue + (360.0 / n) * (j as f64 - half))
        .floor()
        .rem_euclid(360.0);
    let saturation = (base.saturation + (config.saturation_variation / (n + 1.0)) * row_step)
        .floor()
        .min(100.0);
    let light = (base.light - (config.light_variation / (n + 1.0)) * row_step)
        .floor()
        .min(100.0);
    (hue, saturation, light)
}

/// Builds the palette matrix for `base` and `config`.
///
/// `config.size` must be at least 1; a size of 0 yields an empty matrix.
pub fn palette_matrix(
    base: &PickerState,
    config: &PaletteConfig,
    transform: &dyn ColorTransform,
) -> PaletteMatrix {
    let size = config.size;
    let mut cells = Vec::with_capacity(size * size);
    for i in 0..size {
        for j in 0..size {
            let (hue, saturation, light) = cell_channels(base, config, i, j);
            cells.push(PaletteCell {
                hue,
                saturation,
                light,
                color: convert_normalized(transform, hue, saturation, light),
            });
        }
    }
    PaletteMatrix { size, cells }
}

/// Fills one `cell_size` square per matrix cell, column `j` along x.
pub fn paint_palette(matrix: &PaletteMatrix, cell_size: usize, surface: &mut dyn Surface) {
    for (i, row) in matrix.rows().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            surface.fill_rect(j * cell_size, i * cell_size, cell_size, cell_size, cell.color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::FillLog;
    use crate::transform::tests::RecordingTransform;
    use crate::transform::Hpluv;

    fn config(size: usize, sv: f64, lv: f64) -> PaletteConfig {
        PaletteConfig::new(size, sv, lv).unwrap()
    }

    #[test]
    fn size_one_pins_the_centering_formula() {
        for base_hue in [0.0, 90.0, 200.0, 359.0] {
            let base = PickerState::new(base_hue, 60.0, 50.0);
            let m = palette_matrix(&base, &config(1, 30.0, 30.0), &Hpluv);
            assert_eq!(m.size(), 1);
            assert_eq!(m.cells().len(), 1);
            let expected = (base_hue - 180.0_f64).floor().rem_euclid(360.0);
            assert_eq!(m.get(0, 0).unwrap().hue, expected);
        }
    }

    #[test]
    fn size_one_row_offsets() {
        // i + 1 - 0.5 = 0.5; sat += 30/2 * 0.5, light -= 30/2 * 0.5
        let base = PickerState::new(0.0, 60.0, 50.0);
        let cell = *palette_matrix(&base, &config(1, 30.0, 30.0), &Hpluv)
            .get(0, 0)
            .unwrap();
        assert_eq!(cell.saturation, 67.0);
        assert_eq!(cell.light, 42.0);
    }

    #[test]
    fn columns_sweep_the_hue_circle() {
        let base = PickerState::new(100.0, 50.0, 50.0);
        let m = palette_matrix(&base, &config(4, 0.0, 0.0), &Hpluv);
        let hues: Vec<f64> = (0..4).map(|j| m.get(0, j).unwrap().hue).collect();
        assert_eq!(hues, vec![280.0, 10.0, 100.0, 190.0]);
    }

    #[test]
    fn rows_move_saturation_and_light_in_opposite_directions() {
        let base = PickerState::new(0.0, 50.0, 50.0);
        let m = palette_matrix(&base, &config(5, 60.0, 60.0), &Hpluv);
        let sats: Vec<f64> = (0..5).map(|i| m.get(i, 0).unwrap().saturation).collect();
        let lights: Vec<f64> = (0..5).map(|i| m.get(i, 0).unwrap().light).collect();
        assert_eq!(sats, vec![35.0, 45.0, 55.0, 65.0, 75.0]);
        assert_eq!(lights, vec![65.0, 55.0, 45.0, 35.0, 25.0]);
    }

    #[test]
    fn upper_bound_is_clamped_but_lower_bound_is_not() {
        let base = PickerState::new(0.0, 95.0, 5.0);
        let m = palette_matrix(&base, &config(3, 100.0, 100.0), &Hpluv);
        let last = m.get(2, 0).unwrap();
        assert_eq!(last.saturation, 100.0);
        assert!(last.light < 0.0, "light should stay negative: {}", last.light);

        let base = PickerState::new(0.0, 5.0, 95.0);
        let m = palette_matrix(&base, &config(3, 100.0, 100.0), &Hpluv);
        let first = m.get(0, 0).unwrap();
        assert!(first.saturation < 0.0);
        assert_eq!(first.light, 100.0);
    }

    #[test]
    fn negative_channels_are_clamped_only_at_the_transform() {
        let base = PickerState::new(0.0, 5.0, 95.0);
        let t = RecordingTransform::default();
        let m = palette_matrix(&base, &config(3, 100.0, 100.0), &t);
        assert!(m.get(0, 0).unwrap().saturation < 0.0);
        assert!(t.calls.borrow().iter().all(|&(_, s, _)| s >= 0.0));
    }

    #[test]
    fn increasing_saturation_variation_widens_the_spread() {
        let base = PickerState::new(0.0, 50.0, 50.0);
        let spread = |sv: f64| {
            let m = palette_matrix(&base, &config(5, sv, 0.0), &Hpluv);
            let sats: Vec<f64> = (0..5).map(|i| m.get(i, 0).unwrap().saturation).collect();
            let max = sats.iter().cloned().fold(f64::MIN, f64::max);
            let min = sats.iter().cloned().fold(f64::MAX, f64::min);
            max - min
        };
        let spreads: Vec<f64> = [0.0, 20.0, 40.0, 60.0].iter().map(|&v| spread(v)).collect();
        for pair in spreads.windows(2) {
            assert!(pair[1] > pair[0], "spreads not increasing: {spreads:?}");
        }
    }

    #[test]
    fn config_validation() {
        assert!(matches!(
            PaletteConfig::new(0, 10.0, 10.0),
            Err(PickerError::InvalidPaletteSize(0))
        ));
        assert!(matches!(
            PaletteConfig::new(101, 10.0, 10.0),
            Err(PickerError::InvalidPaletteSize(101))
        ));
        assert!(matches!(
            PaletteConfig::new(5, -1.0, 10.0),
            Err(PickerError::InvalidVariation { .. })
        ));
        assert!(matches!(
            PaletteConfig::new(5, 10.0, 100.5),
            Err(PickerError::InvalidVariation { .. })
        ));
        assert!(PaletteConfig::new(100, 100.0, 0.0).is_ok());
    }

    #[test]
    fn get_out_of_range_is_none() {
        let m = palette_matrix(&PickerState::default(), &config(2, 10.0, 10.0), &Hpluv);
        assert!(m.get(2, 0).is_none());
        assert!(m.get(0, 2).is_none());
    }

    #[test]
    fn hex_rows_match_layout() {
        let m = palette_matrix(&PickerState::default(), &config(3, 10.0, 10.0), &Hpluv);
        let rows = m.to_hex_rows();
        assert_eq!(rows.len(), 3);
        assert!(rows.iter().all(|r| r.len() == 3));
        assert_eq!(rows[1][2], m.get(1, 2).unwrap().color.to_hex());
    }

    #[test]
    fn paint_palette_places_columns_along_x() {
        let m = palette_matrix(&PickerState::default(), &config(2, 10.0, 10.0), &Hpluv);
        let mut log = FillLog::default();
        paint_palette(&m, 10, &mut log);
        assert_eq!(log.fills.len(), 4);
        let f = log.fills[1];
        assert_eq!((f.x, f.y, f.w, f.h), (10, 0, 10, 10));
        assert_eq!(f.color, m.get(0, 1).unwrap().color);
    }
}
