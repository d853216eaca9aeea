//! Heatmap figure rendering: thumbnail, overlay, and colorbar panels

use crate::features::composite::{finite_range, min_max_normalize};
use crate::features::table::FeatureTable;
use crate::io::configuration::{COLORBAR_WIDTH, HEATMAP_ALPHA, SALIENCY_COLUMN};
use crate::io::error::{RenderError, Result};
use crate::render::colormap::plasma;
use crate::render::figure::{colorbar, compose_panels, save_png};
use crate::slide::Slide;
use crate::spatial::canvas::HeatmapCanvas;
use crate::spatial::coords::TileCoords;
use image::RgbImage;
use std::path::{Path, PathBuf};

/// Settings for heatmap figure rendering
#[derive(Debug, Clone, Copy)]
pub struct HeatmapOptions {
    /// Number of leading table rows treated as the salient subset
    pub topk: usize,
    /// Min-max normalize the feature column before painting
    pub normalize: bool,
}

/// Painted canvases and the saved figure path
#[derive(Debug)]
pub struct HeatmapArtifacts {
    /// Canvas painted from the active feature column
    pub feature_canvas: HeatmapCanvas,
    /// Canvas painted from the saliency scores of the leading rows
    pub saliency_canvas: HeatmapCanvas,
    /// Path of the saved figure
    pub path: PathBuf,
}

/// Render and save the three-panel heatmap figure for one feature column
///
/// Paints the feature canvas from every finite value of the active
/// column and the saliency canvas from the first `topk` rows, then
/// composes thumbnail, overlay, and colorbar panels and saves them to
/// `<save_dir>/<slide>/<short_name>_HEATMAP_<slide>.png`.
///
/// # Errors
///
/// Returns an error when the feature or saliency column is absent, a
/// tile identifier fails to parse, or the figure cannot be saved.
pub fn render_heatmap_figure(
    table: &FeatureTable,
    feature_column: &str,
    short_name: &str,
    slide: &Slide,
    slide_name: &str,
    save_dir: &Path,
    options: HeatmapOptions,
) -> Result<HeatmapArtifacts> {
    let thumb = slide.thumbnail();
    let (scale_x, scale_y) = slide.scale_factors();

    let feature = table
        .column(feature_column)
        .ok_or_else(|| RenderError::MissingColumn {
            column: feature_column.to_string(),
            slide: slide_name.to_string(),
        })?;
    let feature_values = if options.normalize {
        min_max_normalize(feature)
    } else {
        feature.to_vec()
    };
    let feature_canvas = paint_canvas(
        thumb,
        table.tile_names(),
        &feature_values,
        (scale_x, scale_y),
    )?;

    let saliency = table
        .column(SALIENCY_COLUMN)
        .ok_or_else(|| RenderError::MissingColumn {
            column: SALIENCY_COLUMN.to_string(),
            slide: slide_name.to_string(),
        })?;
    let head = options.topk.min(table.len());
    let saliency_head: Vec<f64> = saliency.iter().copied().take(head).collect();
    let saliency_values = min_max_normalize(&saliency_head);
    let saliency_canvas = paint_canvas(
        thumb,
        table.tile_names().get(..head).unwrap_or_default(),
        &saliency_values,
        (scale_x, scale_y),
    )?;

    let overlay = overlay_heatmap(thumb, &feature_canvas);
    let bar = colorbar(COLORBAR_WIDTH, thumb.height());
    let figure = compose_panels(&[thumb, &overlay, &bar]);

    let path = save_dir
        .join(slide_name)
        .join(format!("{short_name}_HEATMAP_{slide_name}.png"));
    save_png(&figure, &path)?;

    Ok(HeatmapArtifacts {
        feature_canvas,
        saliency_canvas,
        path,
    })
}

/// Paint per-tile values into a thumbnail-sized canvas
///
/// Non-finite values are skipped; overlapping rectangles overwrite in
/// row order.
///
/// # Errors
///
/// Returns an error when a tile identifier fails strict parsing.
pub fn paint_canvas(
    thumb: &RgbImage,
    tile_names: &[String],
    values: &[f64],
    scale: (f64, f64),
) -> Result<HeatmapCanvas> {
    let mut canvas = HeatmapCanvas::new(thumb.width() as usize, thumb.height() as usize);

    for (tile_name, &value) in tile_names.iter().zip(values.iter()) {
        if !value.is_finite() {
            continue;
        }
        let coords = TileCoords::parse(tile_name)?;
        let rect = coords.to_canvas_rect(scale.0, scale.1, canvas.width(), canvas.height());
        canvas.paint(&rect, value as f32);
    }

    Ok(canvas)
}

// Unpainted (zero) cells stay fully transparent; painted cells are
// alpha-blended plasma scaled to the canvas value range.
#[allow(clippy::float_cmp)]
fn overlay_heatmap(thumb: &RgbImage, canvas: &HeatmapCanvas) -> RgbImage {
    let mut overlay = thumb.clone();
    let Some((vmin, vmax)) = finite_range(canvas.values()) else {
        return overlay;
    };
    let span = vmax - vmin;

    for (x, y, pixel) in overlay.enumerate_pixels_mut() {
        let Some(value) = canvas.get(x as usize, y as usize) else {
            continue;
        };
        if value == 0.0 {
            continue;
        }
        let t = if span > 0.0 { (value - vmin) / span } else { 0.0 };
        let color = plasma(t);
        for (channel, &tinted) in pixel.0.iter_mut().zip(color.0.iter()) {
            let blended =
                (1.0 - HEATMAP_ALPHA) * f32::from(*channel) + HEATMAP_ALPHA * f32::from(tinted);
            *channel = blended.round().clamp(0.0, 255.0) as u8;
        }
    }
    overlay
}
