//! Whole-slide image access and stain normalization

/// Slide opening, thumbnails, and region extraction
pub mod reader;
/// Reinhard-style stain color transfer for exported tiles
pub mod stain;

pub use reader::Slide;
