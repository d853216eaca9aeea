//! Raster figure assembly: panel compositing, colorbars, and markers

use crate::io::configuration::{FIGURE_MARGIN, MARKER_LINE_WIDTH, PANEL_GAP};
use crate::io::error::{RenderError, Result};
use crate::render::colormap::plasma;
use crate::spatial::coords::CanvasRect;
use image::{Rgb, RgbImage};
use imageproc::drawing::draw_hollow_rect_mut;
use imageproc::rect::Rect;
use std::path::Path;

/// Marker color for tile location rectangles
const MARKER_COLOR: Rgb<u8> = Rgb([255, 255, 0]);

/// Compose panels left-to-right on a white background
///
/// Panels are separated by a fixed gap, surrounded by a fixed margin,
/// and vertically centered against the tallest panel. An empty panel
/// list yields a margin-only white image.
pub fn compose_panels(panels: &[&RgbImage]) -> RgbImage {
    let tallest = panels.iter().map(|p| p.height()).max().unwrap_or(0);
    let panel_width: u32 = panels.iter().map(|p| p.width()).sum();
    let gaps = PANEL_GAP * panels.len().saturating_sub(1) as u32;

    let width = 2 * FIGURE_MARGIN + panel_width + gaps;
    let height = 2 * FIGURE_MARGIN + tallest;
    let mut figure = RgbImage::from_pixel(width, height, Rgb([255, 255, 255]));

    let mut x = FIGURE_MARGIN;
    for panel in panels {
        let y = FIGURE_MARGIN + (tallest - panel.height()) / 2;
        image::imageops::overlay(&mut figure, *panel, i64::from(x), i64::from(y));
        x += panel.width() + PANEL_GAP;
    }
    figure
}

/// Render a vertical plasma colorbar strip
///
/// The top row maps to the scale maximum (t = 1) and the bottom row to
/// the minimum (t = 0).
pub fn colorbar(width: u32, height: u32) -> RgbImage {
    let mut bar = RgbImage::new(width.max(1), height.max(1));
    let rows = bar.height();
    for y in 0..rows {
        let t = if rows > 1 {
            1.0 - y as f32 / (rows - 1) as f32
        } else {
            1.0
        };
        let color = plasma(t);
        for x in 0..bar.width() {
            bar.put_pixel(x, y, color);
        }
    }
    bar
}

/// Draw a hollow rectangle marking a tile's location on the thumbnail
///
/// Draws nested one-pixel rectangles to reach the configured line
/// width. Empty rectangles are ignored.
pub fn draw_tile_marker(image: &mut RgbImage, rect: &CanvasRect) {
    if rect.is_empty() {
        return;
    }

    for inset in 0..MARKER_LINE_WIDTH {
        let x = rect.x0 as i32 + inset as i32;
        let y = rect.y0 as i32 + inset as i32;
        let width = (rect.x1 - rect.x0) as u32;
        let height = (rect.y1 - rect.y0) as u32;
        if width <= 2 * inset || height <= 2 * inset {
            break;
        }
        let outline = Rect::at(x, y).of_size(width - 2 * inset, height - 2 * inset);
        draw_hollow_rect_mut(image, outline, MARKER_COLOR);
    }
}

/// Save a figure as PNG, creating parent directories as needed
///
/// # Errors
///
/// Returns an error when directory creation or image encoding fails.
pub fn save_png(image: &RgbImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|source| RenderError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source,
        })?;
    }

    image.save(path).map_err(|source| RenderError::ImageExport {
        path: path.to_path_buf(),
        source,
    })
}
