//! Cumulative visitation heatmap.

use ndarray::Array2;
use tracing::trace;

use super::Point;

/// Upper bound of the normalized display range.
const DISPLAY_MAX: f64 = 255.0;

/// Per-pixel visitation counts over the working frame.
///
/// Indexed `[row, col]`, i.e. `[y, x]`. Cells only ever increase until
/// [`DensityGrid::reset`].
#[derive(Debug, Clone)]
pub struct DensityGrid {
    grid: Array2<u32>,
}

impl DensityGrid {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            grid: Array2::zeros((height, width)),
        }
    }

    /// `(width, height)` of the grid.
    pub fn dimensions(&self) -> (usize, usize) {
        let (rows, cols) = self.grid.dim();
        (cols, rows)
    }

    /// Count one visit at `point`. Returns `false` when the point falls off the grid.
    pub fn record(&mut self, point: Point) -> bool {
        let Some((row, col)) = self.cell_of(point) else {
            trace!(x = point.x, y = point.y, "density point outside grid");
            return false;
        };
        let cell = &mut self.grid[[row, col]];
        *cell = cell.saturating_add(1);
        true
    }

    fn cell_of(&self, point: Point) -> Option<(usize, usize)> {
        if !point.x.is_finite() || !point.y.is_finite() || point.x < 0.0 || point.y < 0.0 {
            return None;
        }
        let (col, row) = (point.x.floor() as usize, point.y.floor() as usize);
        let (rows, cols) = self.grid.dim();
        (row < rows && col < cols).then_some((row, col))
    }

    /// Raw counts.
    pub fn raw(&self) -> &Array2<u32> {
        &self.grid
    }

    /// Min-max normalized copy in `0..=255`, relative to this session's own extremes.
    ///
    /// A flat grid (including an empty one) maps to all zeros.
    pub fn snapshot(&self) -> Array2<u8> {
        let min = self.grid.iter().copied().min().unwrap_or(0);
        let max = self.grid.iter().copied().max().unwrap_or(0);
        if max == min {
            return Array2::zeros(self.grid.raw_dim());
        }

        let scale = DISPLAY_MAX / f64::from(max - min);
        self.grid
            .mapv(|v| (f64::from(v - min) * scale).min(DISPLAY_MAX) as u8)
    }

    pub fn reset(&mut self) {
        self.grid.fill(0);
    }
}
