//! Min-max normalization and composite score computation
//!
//! The composite score for a tile is the mean of the min-max normalized
//! values of every configured feature that contributes a finite value for
//! that tile. Features absent from the table, or with no finite value
//! anywhere in the slide, are excluded from the average entirely.

use crate::features::table::FeatureTable;
use crate::io::configuration::COMPOSITE_COLUMN;
use crate::io::error::{RenderError, Result};
use num_traits::Float;

/// Outcome of appending the composite column to a feature table
#[derive(Debug, Clone)]
pub struct CompositeSummary {
    /// Feature columns that contributed to the composite, in configured order
    pub contributing: Vec<String>,
    /// Configured features skipped because they were absent or entirely missing
    pub skipped: Vec<String>,
}

/// Find the minimum and maximum finite values of a sequence
///
/// Returns `None` when no value is finite. Shared by `f64` feature
/// columns and `f32` heatmap canvases.
pub fn finite_range<T, I>(values: I) -> Option<(T, T)>
where
    T: Float,
    I: IntoIterator<Item = T>,
{
    values
        .into_iter()
        .filter(|v| v.is_finite())
        .fold(None, |range, v| match range {
            None => Some((v, v)),
            Some((min, max)) => Some((min.min(v), max.max(v))),
        })
}

/// Min-max normalize a column of values into [0, 1]
///
/// Infinities are coerced to NaN before the range is computed, and NaN
/// values stay NaN in the output. When every finite value is equal, all
/// of them map to 0.0 (the range minimum).
pub fn min_max_normalize(values: &[f64]) -> Vec<f64> {
    let coerced: Vec<f64> = values
        .iter()
        .map(|&v| if v.is_finite() { v } else { f64::NAN })
        .collect();

    let Some((min, max)) = finite_range(coerced.iter().copied()) else {
        return coerced;
    };

    let span = max - min;
    coerced
        .into_iter()
        .map(|v| {
            if v.is_nan() {
                f64::NAN
            } else if span > 0.0 {
                (v - min) / span
            } else {
                0.0
            }
        })
        .collect()
}

/// Normalize the configured features and append the row-wise composite column
///
/// Each present feature column is min-max normalized independently; the
/// composite for a row is the mean of the normalized values that are
/// finite in that row. Rows where nothing contributes get NaN.
///
/// # Errors
///
/// Returns [`RenderError::NoValidFeatures`] when no configured feature
/// column contributes a single finite value, and propagates column
/// append failures.
pub fn append_composite(
    table: &mut FeatureTable,
    features: &[(&str, &str)],
    slide: &str,
) -> Result<CompositeSummary> {
    let mut normalized: Vec<Vec<f64>> = Vec::new();
    let mut contributing = Vec::new();
    let mut skipped = Vec::new();

    for &(name, _) in features {
        let Some(column) = table.column(name) else {
            skipped.push(name.to_string());
            continue;
        };

        let scaled = min_max_normalize(column);
        if scaled.iter().all(|v| v.is_nan()) {
            skipped.push(name.to_string());
            continue;
        }

        normalized.push(scaled);
        contributing.push(name.to_string());
    }

    if normalized.is_empty() {
        return Err(RenderError::NoValidFeatures {
            slide: slide.to_string(),
        });
    }

    let composite: Vec<f64> = (0..table.len())
        .map(|row| {
            let mut sum = 0.0;
            let mut count = 0.0;
            for column in &normalized {
                if let Some(&v) = column.get(row)
                    && v.is_finite()
                {
                    sum += v;
                    count += 1.0;
                }
            }
            if count > 0.0 { sum / count } else { f64::NAN }
        })
        .collect();

    table.append_column(COMPOSITE_COLUMN, composite)?;

    Ok(CompositeSummary {
        contributing,
        skipped,
    })
}

/// Mean of the finite values in a column
///
/// Returns NaN when no value is finite.
pub fn finite_mean(values: &[f64]) -> f64 {
    let mut sum = 0.0;
    let mut count = 0.0;
    for &v in values {
        if v.is_finite() {
            sum += v;
            count += 1.0;
        }
    }
    if count > 0.0 { sum / count } else { f64::NAN }
}
