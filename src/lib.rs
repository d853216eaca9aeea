//! Whole-slide heatmap and exemplar tile rendering for tile-level histomic features
//!
//! The pipeline reads one CSV of tile-level features per slide, computes a
//! min-max normalized composite score over a configured feature subset,
//! paints that score as a heatmap over the slide thumbnail, and exports
//! crops of the top and bottom ranked tiles for visual inspection.

#![deny(unsafe_code)]

/// Feature table loading and composite score computation
pub mod features;
/// Input/output operations, CLI orchestration, and error handling
pub mod io;
/// Figure assembly: colormaps, panel compositing, heatmaps, and tile exports
pub mod render;
/// Whole-slide image access and stain normalization
pub mod slide;
/// Tile coordinate parsing and heatmap canvas painting
pub mod spatial;

pub use io::error::{RenderError, Result};
