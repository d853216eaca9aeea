//! Tile identifier parsing and coordinate scaling
//!
//! Tile identifiers encode their pixel-space bounds in the filename, e.g.
//! `slide_left-10_top-20_right-30_bottom-40.json`. Parsing is strict: a
//! missing marker, non-numeric digits, or inverted extents produce a
//! [`RenderError::TileName`](crate::io::error::RenderError::TileName)
//! instead of a panic.

use crate::io::error::{Result, tile_name_error};

/// Axis-aligned tile bounds in native slide pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileCoords {
    /// Left edge (inclusive)
    pub left: u32,
    /// Top edge (inclusive)
    pub top: u32,
    /// Right edge (exclusive)
    pub right: u32,
    /// Bottom edge (exclusive)
    pub bottom: u32,
}

/// Half-open pixel rectangle in thumbnail canvas space
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CanvasRect {
    /// Left column (inclusive)
    pub x0: usize,
    /// Top row (inclusive)
    pub y0: usize,
    /// Right column (exclusive)
    pub x1: usize,
    /// Bottom row (exclusive)
    pub y1: usize,
}

impl TileCoords {
    /// Parse tile bounds from a tile identifier string
    ///
    /// The value for each marker runs from the last `_<marker>-` occurrence
    /// to the next `_` or end of string, with a trailing `.json` stripped.
    ///
    /// # Errors
    ///
    /// Returns a `TileName` error when a marker is absent, its value isn't
    /// an unsigned integer, or the parsed extents are inverted or empty.
    pub fn parse(name: &str) -> Result<Self> {
        let left = parse_marker(name, "left")?;
        let top = parse_marker(name, "top")?;
        let right = parse_marker(name, "right")?;
        let bottom = parse_marker(name, "bottom")?;

        if right <= left {
            return Err(tile_name_error(
                name,
                &format!("right bound {right} does not exceed left bound {left}"),
            ));
        }
        if bottom <= top {
            return Err(tile_name_error(
                name,
                &format!("bottom bound {bottom} does not exceed top bound {top}"),
            ));
        }

        Ok(Self {
            left,
            top,
            right,
            bottom,
        })
    }

    /// Tile width in native pixels
    pub const fn width(&self) -> u32 {
        self.right - self.left
    }

    /// Tile height in native pixels
    pub const fn height(&self) -> u32 {
        self.bottom - self.top
    }

    /// Scale the bounds into thumbnail canvas space
    ///
    /// X and Y use independent scale factors since slide thumbnails are
    /// not guaranteed to be isotropically scaled. The result is clamped
    /// to the canvas dimensions.
    pub fn to_canvas_rect(
        &self,
        scale_x: f64,
        scale_y: f64,
        canvas_width: usize,
        canvas_height: usize,
    ) -> CanvasRect {
        let scale = |v: u32, factor: f64, limit: usize| -> usize {
            ((f64::from(v) * factor) as usize).min(limit)
        };

        CanvasRect {
            x0: scale(self.left, scale_x, canvas_width),
            y0: scale(self.top, scale_y, canvas_height),
            x1: scale(self.right, scale_x, canvas_width),
            y1: scale(self.bottom, scale_y, canvas_height),
        }
    }
}

impl CanvasRect {
    /// Check whether the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.x1 <= self.x0 || self.y1 <= self.y0
    }
}

fn parse_marker(name: &str, label: &str) -> Result<u32> {
    let marker = format!("_{label}-");
    let Some((_, rest)) = name.rsplit_once(&marker) else {
        return Err(tile_name_error(name, &format!("missing '{marker}' marker")));
    };

    let digits = rest.split('_').next().unwrap_or(rest);
    let digits = digits.strip_suffix(".json").unwrap_or(digits);

    digits.parse().map_err(|_| {
        tile_name_error(
            name,
            &format!("'{digits}' after '{marker}' is not an unsigned integer"),
        )
    })
}
