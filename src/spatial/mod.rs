//! Spatial data structures for tile geometry
//!
//! This module contains spatial-related functionality including:
//! - Tile identifier parsing into pixel bounds
//! - Coordinate scaling from native slide space to thumbnail space
//! - Heatmap canvas painting

/// Heatmap canvas sized to the slide thumbnail
pub mod canvas;
/// Tile identifier parsing and coordinate scaling
pub mod coords;

pub use canvas::HeatmapCanvas;
pub use coords::{CanvasRect, TileCoords};
