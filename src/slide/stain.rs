//! Reinhard-style stain color normalization for exported tiles
//!
//! Transfers per-channel mean and standard deviation of tissue pixels
//! toward a reference H&E profile so tiles from different scanners are
//! visually comparable. Near-white background pixels are left untouched
//! and excluded from the statistics.

use image::{Rgb, RgbImage};

/// Reference H&E tissue mean per RGB channel
const REFERENCE_MEANS: [f64; 3] = [182.0, 132.0, 168.0];

/// Reference H&E tissue standard deviation per RGB channel
const REFERENCE_STDS: [f64; 3] = [36.0, 48.0, 32.0];

/// Channels at or above this value on all channels count as background
const BACKGROUND_THRESHOLD: u8 = 235;

/// Normalize tile colors toward the reference H&E profile
///
/// Tiles with no tissue pixels, or with zero variance on some channel,
/// are returned unchanged.
pub fn normalize_stain(rgb: &RgbImage) -> RgbImage {
    let tissue: Vec<&Rgb<u8>> = rgb.pixels().filter(|p| !is_background(p)).collect();
    if tissue.is_empty() {
        return rgb.clone();
    }

    let count = tissue.len() as f64;
    let mut means = [0.0f64; 3];
    for pixel in &tissue {
        for (mean, &value) in means.iter_mut().zip(pixel.0.iter()) {
            *mean += f64::from(value);
        }
    }
    for mean in &mut means {
        *mean /= count;
    }

    let mut variances = [0.0f64; 3];
    for pixel in &tissue {
        for ((variance, mean), &value) in variances.iter_mut().zip(means.iter()).zip(pixel.0.iter())
        {
            let delta = f64::from(value) - mean;
            *variance += delta * delta;
        }
    }
    let mut stds = [0.0f64; 3];
    for (std, variance) in stds.iter_mut().zip(variances.iter()) {
        *std = (variance / count).sqrt();
    }
    if stds.iter().any(|&s| s <= f64::EPSILON) {
        return rgb.clone();
    }

    let mut out = rgb.clone();
    for pixel in out.pixels_mut() {
        if is_background(pixel) {
            continue;
        }
        let mut mapped = [0u8; 3];
        for channel in 0..3 {
            let value = pixel.0.get(channel).copied().unwrap_or(0);
            let mean = means.get(channel).copied().unwrap_or(0.0);
            let std = stds.get(channel).copied().unwrap_or(1.0);
            let ref_mean = REFERENCE_MEANS.get(channel).copied().unwrap_or(0.0);
            let ref_std = REFERENCE_STDS.get(channel).copied().unwrap_or(1.0);

            let transferred = (f64::from(value) - mean) / std * ref_std + ref_mean;
            if let Some(slot) = mapped.get_mut(channel) {
                *slot = transferred.clamp(0.0, 255.0).round() as u8;
            }
        }
        *pixel = Rgb(mapped);
    }
    out
}

/// Check whether a pixel is near-white slide background
pub fn is_background(pixel: &Rgb<u8>) -> bool {
    pixel.0.iter().all(|&v| v >= BACKGROUND_THRESHOLD)
}
