//! Top and bottom ranked tile export with location markers

use crate::features::table::FeatureTable;
use crate::io::configuration::TILE_EXPORT_MPP;
use crate::io::error::{RenderError, Result};
use crate::render::figure::{compose_panels, draw_tile_marker, save_png};
use crate::slide::Slide;
use crate::slide::stain::normalize_stain;
use crate::spatial::coords::TileCoords;
use std::cmp::Ordering;
use std::path::{Path, PathBuf};

/// Settings for ranked tile export
#[derive(Debug, Clone, Copy)]
pub struct TileExportOptions {
    /// Number of leading table rows considered, and the export cap
    pub topk: usize,
    /// Side length of the exported square tile crop, in pixels
    pub tile_size: u32,
    /// Apply stain color normalization to exported tiles
    pub color_normalize: bool,
}

/// Export the top and bottom ranked tiles of the active feature column
///
/// Scores are NaN-dropped and sorted descending; the top half and
/// bottom half of `min(available, topk)` tiles are each exported as a
/// two-panel figure: the extracted crop next to the thumbnail with the
/// tile's scaled bounding box marked.
///
/// # Errors
///
/// Returns an error when the feature column is absent, a tile
/// identifier fails to parse, or extraction/saving fails.
pub fn export_ranked_tiles(
    table: &FeatureTable,
    feature_column: &str,
    short_name: &str,
    slide: &Slide,
    slide_name: &str,
    save_dir: &Path,
    options: TileExportOptions,
) -> Result<Vec<PathBuf>> {
    let column = table
        .column(feature_column)
        .ok_or_else(|| RenderError::MissingColumn {
            column: feature_column.to_string(),
            slide: slide_name.to_string(),
        })?;

    let mut ranked: Vec<(&str, f64)> = table
        .tile_names()
        .iter()
        .zip(column.iter())
        .filter(|(_, value)| !value.is_nan())
        .map(|(name, &value)| (name.as_str(), value))
        .collect();
    ranked.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    let half = ranked.len().min(options.topk) / 2;
    let tiles_dir = save_dir
        .join(slide_name)
        .join(format!("{short_name}_tiles"));

    let mut saved = Vec::new();
    for (rank, (tile_name, _)) in select_ranks(&ranked, half) {
        let path = export_tile(tile_name, rank, slide, &tiles_dir, options)?;
        saved.push(path);
    }
    Ok(saved)
}

/// Pair the top and bottom `half` entries with their signed rank labels
///
/// Top entries get ranks `0..half`; bottom entries get `-1..=-half`,
/// matching the rank encoding used in output filenames.
fn select_ranks<'a>(
    ranked: &'a [(&'a str, f64)],
    half: usize,
) -> Vec<(i64, &'a (&'a str, f64))> {
    let mut selected = Vec::with_capacity(half * 2);
    for (i, entry) in ranked.iter().take(half).enumerate() {
        selected.push((i as i64, entry));
    }
    for offset in 1..=half {
        if let Some(entry) = ranked.get(ranked.len() - offset) {
            selected.push((-(offset as i64), entry));
        }
    }
    selected
}

fn export_tile(
    tile_name: &str,
    rank: i64,
    slide: &Slide,
    tiles_dir: &Path,
    options: TileExportOptions,
) -> Result<PathBuf> {
    let coords = TileCoords::parse(tile_name)?;
    let mut crop =
        slide.extract_region(&coords, (options.tile_size, options.tile_size), TILE_EXPORT_MPP)?;

    if options.color_normalize {
        crop = normalize_stain(&crop);
    }

    let mut marked = slide.thumbnail().clone();
    let (scale_x, scale_y) = slide.scale_factors();
    let rect = coords.to_canvas_rect(
        scale_x,
        scale_y,
        marked.width() as usize,
        marked.height() as usize,
    );
    draw_tile_marker(&mut marked, &rect);

    let figure = compose_panels(&[&crop, &marked]);
    let filename = format!("rank={rank}__{}.png", sanitize_tile_name(tile_name));
    let path = tiles_dir.join(filename);
    save_png(&figure, &path)?;
    Ok(path)
}

/// Strip the tile identifier down to a safe filename stem
fn sanitize_tile_name(name: &str) -> String {
    let stem = name.strip_suffix(".json").unwrap_or(name);
    stem.replace(['/', '\\'], "-")
}
