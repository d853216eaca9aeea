//! Whole-slide image access: thumbnails and region extraction

use crate::io::configuration::{SLIDE_BASE_MPP, THUMBNAIL_MAX_DIMENSION};
use crate::io::error::{RenderError, Result, invalid_parameter};
use crate::spatial::coords::TileCoords;
use image::RgbImage;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};

/// An opened whole-slide image with a cached thumbnail
///
/// Pyramidal formats are read through their base raster; the thumbnail
/// is downscaled once at open time so that every rendering stage shares
/// the same backdrop and scale factors.
#[derive(Debug, Clone)]
pub struct Slide {
    path: PathBuf,
    image: RgbImage,
    thumbnail: RgbImage,
}

impl Slide {
    /// Open `<wsi_dir>/<name>.<ext>` and build its thumbnail
    ///
    /// # Errors
    ///
    /// Returns [`RenderError::SlideLoad`] when the file cannot be read
    /// or decoded.
    pub fn open(wsi_dir: &Path, name: &str, ext: &str) -> Result<Self> {
        let path = wsi_dir.join(format!("{name}.{ext}"));
        let image = image::open(&path)
            .map_err(|source| RenderError::SlideLoad {
                path: path.clone(),
                source,
            })?
            .to_rgb8();

        let thumbnail = build_thumbnail(&image);
        Ok(Self {
            path,
            image,
            thumbnail,
        })
    }

    /// Path of the underlying slide file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Native slide dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    /// The cached low-resolution thumbnail
    pub const fn thumbnail(&self) -> &RgbImage {
        &self.thumbnail
    }

    /// Thumbnail-over-native scale factors as (x, y)
    ///
    /// Kept independent per axis; thumbnails are not guaranteed to be
    /// isotropically scaled.
    pub fn scale_factors(&self) -> (f64, f64) {
        let (width, height) = self.dimensions();
        (
            f64::from(self.thumbnail.width()) / f64::from(width),
            f64::from(self.thumbnail.height()) / f64::from(height),
        )
    }

    /// Extract a native-resolution region rescaled to a target resolution
    ///
    /// The crop is first rescaled from the slide base resolution to the
    /// requested microns-per-pixel target, then resized to `out_size`.
    ///
    /// # Errors
    ///
    /// Returns an error when `mpp` is not a positive finite number, the
    /// output size is degenerate, or the region lies outside the slide.
    pub fn extract_region(
        &self,
        coords: &TileCoords,
        out_size: (u32, u32),
        mpp: f64,
    ) -> Result<RgbImage> {
        if !(mpp.is_finite() && mpp > 0.0) {
            return Err(invalid_parameter(
                "mpp",
                &mpp,
                &"microns per pixel must be positive and finite",
            ));
        }
        if out_size.0 == 0 || out_size.1 == 0 {
            return Err(invalid_parameter(
                "out_size",
                &format!("{}x{}", out_size.0, out_size.1),
                &"output dimensions must be at least 1x1",
            ));
        }

        let (width, height) = self.dimensions();
        if coords.left >= width || coords.top >= height {
            return Err(invalid_parameter(
                "region",
                &format!("left={} top={}", coords.left, coords.top),
                &format!("region origin lies outside the {width}x{height} slide"),
            ));
        }

        let right = coords.right.min(width);
        let bottom = coords.bottom.min(height);
        let crop_width = right - coords.left;
        let crop_height = bottom - coords.top;

        let crop =
            image::imageops::crop_imm(&self.image, coords.left, coords.top, crop_width, crop_height)
                .to_image();

        // Rescale from the base resolution to the target mpp first so the
        // final resize sees the intended field of view.
        let mpp_scale = SLIDE_BASE_MPP / mpp;
        let target_width = ((f64::from(crop_width) * mpp_scale).round() as u32).max(1);
        let target_height = ((f64::from(crop_height) * mpp_scale).round() as u32).max(1);
        let rescaled =
            image::imageops::resize(&crop, target_width, target_height, FilterType::Lanczos3);

        Ok(image::imageops::resize(
            &rescaled,
            out_size.0,
            out_size.1,
            FilterType::Lanczos3,
        ))
    }
}

// Longest side capped at the configured maximum, aspect preserved.
fn build_thumbnail(image: &RgbImage) -> RgbImage {
    let (width, height) = image.dimensions();
    let longest = width.max(height);
    if longest <= THUMBNAIL_MAX_DIMENSION {
        return image.clone();
    }

    let scale = f64::from(THUMBNAIL_MAX_DIMENSION) / f64::from(longest);
    let thumb_width = ((f64::from(width) * scale).round() as u32).max(1);
    let thumb_height = ((f64::from(height) * scale).round() as u32).max(1);
    image::imageops::resize(image, thumb_width, thumb_height, FilterType::Lanczos3)
}
