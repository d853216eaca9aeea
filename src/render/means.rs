//! Per-slide feature means appended to a batch summary CSV

use crate::features::composite::finite_mean;
use crate::features::table::FeatureTable;
use crate::io::configuration::{COMPOSITE_COLUMN, MEANS_FILENAME};
use crate::io::error::{RenderError, Result};
use std::path::{Path, PathBuf};

/// Append one summary row of per-feature means for a slide
///
/// The row holds the slide name, the mean raw value of every configured
/// feature column, and the composite mean. The header spans the full
/// configured feature list so every appended row has the same shape;
/// features absent from a slide's table, or with no finite value, are
/// written as NaN. The header is written only when the summary file does
/// not exist yet.
///
/// # Errors
///
/// Returns an error when the file cannot be opened or the row cannot
/// be written.
pub fn export_means(
    table: &FeatureTable,
    features: &[(&str, &str)],
    slide_name: &str,
    save_dir: &Path,
) -> Result<PathBuf> {
    let path = save_dir.join(MEANS_FILENAME);
    let write_header = !path.exists();

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|source| RenderError::FileSystem {
            path: path.clone(),
            operation: "open summary table",
            source,
        })?;
    let mut writer = csv::Writer::from_writer(file);
    let write_error = |source: csv::Error| RenderError::TableWrite {
        path: path.clone(),
        source,
    };

    if write_header {
        let mut header = vec!["slide_name".to_string()];
        header.extend(features.iter().map(|&(name, _)| name.to_string()));
        header.push(COMPOSITE_COLUMN.to_string());
        writer.write_record(&header).map_err(write_error)?;
    }

    let mut row = vec![slide_name.to_string()];
    for &(name, _) in features {
        let mean = table.column(name).map_or(f64::NAN, finite_mean);
        row.push(format_mean(mean));
    }
    let composite_mean = table.column(COMPOSITE_COLUMN).map_or(f64::NAN, finite_mean);
    row.push(format_mean(composite_mean));

    writer.write_record(&row).map_err(write_error)?;
    writer
        .flush()
        .map_err(|source| RenderError::FileSystem {
            path: path.clone(),
            operation: "flush summary table",
            source,
        })?;

    Ok(path)
}

fn format_mean(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else {
        format!("{value:.6}")
    }
}
