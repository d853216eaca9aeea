//! Heatmap canvas painting over the thumbnail pixel grid

use crate::spatial::coords::CanvasRect;
use ndarray::{Array2, s};

/// 2D score canvas sized to the slide thumbnail
///
/// Cells hold a single scalar per pixel; zero means unpainted. Tile
/// rectangles are painted whole, and overlapping rectangles overwrite
/// rather than blend (last painted wins).
#[derive(Debug, Clone)]
pub struct HeatmapCanvas {
    cells: Array2<f32>,
}

impl HeatmapCanvas {
    /// Create a zero-initialized canvas with the given pixel dimensions
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            cells: Array2::zeros((height, width)),
        }
    }

    /// Canvas width in pixels
    pub fn width(&self) -> usize {
        self.cells.ncols()
    }

    /// Canvas height in pixels
    pub fn height(&self) -> usize {
        self.cells.nrows()
    }

    /// Fill a rectangle with a single value
    ///
    /// Rectangles wholly or partially outside the canvas are clamped by
    /// construction of [`CanvasRect`]; empty rectangles are ignored.
    pub fn paint(&mut self, rect: &CanvasRect, value: f32) {
        if rect.is_empty() {
            return;
        }
        let y1 = rect.y1.min(self.height());
        let x1 = rect.x1.min(self.width());
        if rect.y0 >= y1 || rect.x0 >= x1 {
            return;
        }
        self.cells
            .slice_mut(s![rect.y0..y1, rect.x0..x1])
            .fill(value);
    }

    /// Read a single cell, if within bounds
    pub fn get(&self, x: usize, y: usize) -> Option<f32> {
        self.cells.get((y, x)).copied()
    }

    /// Iterate over all cell values in row-major order
    pub fn values(&self) -> impl Iterator<Item = f32> + '_ {
        self.cells.iter().copied()
    }

    /// Count of painted (nonzero) cells
    // Exact zero is the unpainted sentinel
    #[allow(clippy::float_cmp)]
    pub fn painted_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v != 0.0).count()
    }
}
