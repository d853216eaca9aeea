//! Figure assembly: colormaps, panel compositing, heatmaps, and tile exports

/// Plasma colormap via anchor interpolation
pub mod colormap;
/// Panel compositing, colorbars, and marker drawing
pub mod figure;
/// Three-panel heatmap figure rendering
pub mod heatmap;
/// Per-slide feature means summary export
pub mod means;
/// Top and bottom ranked tile export
pub mod tiles;
