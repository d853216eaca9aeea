//! Command-line interface for batch whole-slide heatmap rendering

use crate::features::composite::append_composite;
use crate::features::table::FeatureTable;
use crate::io::configuration::{
    COMPOSITE_COLUMN, COMPOSITE_SHORT_NAME, DEFAULT_TILE_SIZE, DEFAULT_TOPK,
    DEFAULT_WSI_EXTENSION, FEATURE_LIST,
};
use crate::io::error::{RenderError, Result, invalid_parameter};
use crate::io::progress::ProgressManager;
use crate::render::heatmap::{HeatmapOptions, render_heatmap_figure};
use crate::render::means::export_means;
use crate::render::tiles::{TileExportOptions, export_ranked_tiles};
use crate::slide::Slide;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "slideheat")]
#[command(
    author,
    version,
    about = "Render whole-slide heatmaps and exemplar tiles for histomic features"
)]
/// Command-line arguments for the heatmap rendering tool
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Directory holding one feature CSV per slide
    #[arg(long, value_name = "DIR")]
    pub feats_dir: PathBuf,

    /// Directory holding the whole-slide images
    #[arg(long, value_name = "DIR")]
    pub wsi_dir: PathBuf,

    /// Output directory root (defaults to the feature directory)
    #[arg(long, value_name = "DIR")]
    pub save_dir: Option<PathBuf>,

    /// Whole-slide image file extension
    #[arg(long, default_value = DEFAULT_WSI_EXTENSION)]
    pub wsi_ext: String,

    /// Comma-separated slide names (defaults to every CSV stem in the feature directory)
    #[arg(long, value_delimiter = ',', value_name = "NAMES")]
    pub slides: Option<Vec<String>>,

    /// Number of ranked tiles to export per slide
    #[arg(long, default_value_t = DEFAULT_TOPK)]
    pub topk: usize,

    /// Side length of exported square tile crops, in pixels
    #[arg(long, default_value_t = DEFAULT_TILE_SIZE)]
    pub tile_size: u32,

    /// Paint raw feature values instead of min-max normalized ones
    #[arg(long)]
    pub raw: bool,

    /// Apply stain color normalization to exported tiles
    #[arg(long)]
    pub color_normalize: bool,

    /// Also render one heatmap per configured feature
    #[arg(long)]
    pub per_feature: bool,

    /// Append per-slide feature means to a batch summary CSV
    #[arg(long)]
    pub export_means: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Enable debug mode (not implemented; rejected at validation)
    #[arg(long)]
    pub debug: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Check if feature values should be min-max normalized for the heatmap
    pub const fn normalize_features(&self) -> bool {
        !self.raw
    }

    /// Resolve the output directory root
    pub fn resolved_save_dir(&self) -> &Path {
        self.save_dir.as_deref().unwrap_or(&self.feats_dir)
    }
}

/// Per-slide context threaded through the rendering stages
///
/// Groups the open slide with its name so no stage relies on carried-over
/// mutable processor state.
pub struct SlideContext {
    /// Slide name without file extension
    pub name: String,
    /// The opened slide with its cached thumbnail
    pub slide: Slide,
}

/// Orchestrates batch slide processing with progress tracking
pub struct SlideProcessor {
    cli: Cli,
    progress_manager: Option<ProgressManager>,
}

impl SlideProcessor {
    /// Create a new slide processor with the given CLI arguments
    pub fn new(cli: Cli) -> Self {
        let progress_manager = cli.should_show_progress().then(ProgressManager::new);

        Self {
            cli,
            progress_manager,
        }
    }

    /// Process every configured slide in sequence
    ///
    /// The first error aborts the whole batch; there is no retry and no
    /// partial-failure isolation between slides.
    ///
    /// # Errors
    ///
    /// Returns an error if parameter validation, slide discovery, or any
    /// slide's rendering stages fail.
    pub fn process(&mut self) -> Result<()> {
        self.validate()?;

        let save_dir = self.cli.resolved_save_dir().to_path_buf();
        std::fs::create_dir_all(&save_dir).map_err(|source| RenderError::FileSystem {
            path: save_dir.clone(),
            operation: "create output directory",
            source,
        })?;

        let slides = self.collect_slides()?;
        if slides.is_empty() {
            return Ok(());
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.initialize(slides.len());
        }

        for (index, slide_name) in slides.iter().enumerate() {
            self.process_slide(slide_name, index, &save_dir)?;
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.finish();
        }

        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if self.cli.debug {
            return Err(invalid_parameter(
                "debug",
                &true,
                &"debug mode is not implemented",
            ));
        }
        if self.cli.topk < 2 {
            return Err(invalid_parameter(
                "topk",
                &self.cli.topk,
                &"must be at least 2 to split into top and bottom halves",
            ));
        }
        if self.cli.tile_size == 0 {
            return Err(invalid_parameter(
                "tile-size",
                &self.cli.tile_size,
                &"must be at least 1 pixel",
            ));
        }
        Ok(())
    }

    fn collect_slides(&self) -> Result<Vec<String>> {
        if let Some(slides) = &self.cli.slides {
            return Ok(slides.clone());
        }

        let mut slides = Vec::new();
        let entries = std::fs::read_dir(&self.cli.feats_dir).map_err(|source| {
            RenderError::FileSystem {
                path: self.cli.feats_dir.clone(),
                operation: "read feature directory",
                source,
            }
        })?;
        for entry in entries {
            let path = entry
                .map_err(|source| RenderError::FileSystem {
                    path: self.cli.feats_dir.clone(),
                    operation: "read feature directory",
                    source,
                })?
                .path();
            if path.extension().and_then(|s| s.to_str()) == Some("csv")
                && let Some(stem) = path.file_stem().and_then(|s| s.to_str())
            {
                slides.push(stem.to_string());
            }
        }
        slides.sort();
        Ok(slides)
    }

    fn stage_count(&self) -> usize {
        // load, open, composite, heatmap, tiles
        5 + usize::from(self.cli.per_feature) + usize::from(self.cli.export_means)
    }

    // Allow print for user feedback on skipped feature columns
    #[allow(clippy::print_stderr)]
    fn process_slide(&mut self, slide_name: &str, index: usize, save_dir: &Path) -> Result<()> {
        let stage_count = self.stage_count();
        let mut stage = 0;
        if let Some(ref mut pm) = self.progress_manager {
            pm.start_slide(index, slide_name, stage_count);
        }

        let mut table = FeatureTable::load(&self.cli.feats_dir, slide_name)?;
        stage += 1;
        self.report_stage(index, stage);

        let context = SlideContext {
            name: slide_name.to_string(),
            slide: Slide::open(&self.cli.wsi_dir, slide_name, &self.cli.wsi_ext)?,
        };
        stage += 1;
        self.report_stage(index, stage);

        let summary = append_composite(&mut table, &FEATURE_LIST, slide_name)?;
        if !self.cli.quiet {
            for skipped in &summary.skipped {
                eprintln!("Warning: {skipped} not found in {slide_name}.csv");
            }
        }
        stage += 1;
        self.report_stage(index, stage);

        let heatmap_options = HeatmapOptions {
            topk: self.cli.topk,
            normalize: self.cli.normalize_features(),
        };
        render_heatmap_figure(
            &table,
            COMPOSITE_COLUMN,
            COMPOSITE_SHORT_NAME,
            &context.slide,
            &context.name,
            save_dir,
            heatmap_options,
        )?;
        stage += 1;
        self.report_stage(index, stage);

        let tile_options = TileExportOptions {
            topk: self.cli.topk,
            tile_size: self.cli.tile_size,
            color_normalize: self.cli.color_normalize,
        };
        export_ranked_tiles(
            &table,
            COMPOSITE_COLUMN,
            COMPOSITE_SHORT_NAME,
            &context.slide,
            &context.name,
            save_dir,
            tile_options,
        )?;
        stage += 1;
        self.report_stage(index, stage);

        if self.cli.per_feature {
            for (feature, display_name) in FEATURE_LIST {
                if !table.has_column(feature) {
                    continue;
                }
                render_heatmap_figure(
                    &table,
                    feature,
                    display_name,
                    &context.slide,
                    &context.name,
                    save_dir,
                    heatmap_options,
                )?;
            }
            stage += 1;
            self.report_stage(index, stage);
        }

        if self.cli.export_means {
            export_means(&table, &FEATURE_LIST, slide_name, save_dir)?;
            stage += 1;
            self.report_stage(index, stage);
        }

        if let Some(ref mut pm) = self.progress_manager {
            pm.complete_slide(index);
        }

        Ok(())
    }

    fn report_stage(&mut self, index: usize, stage: usize) {
        if let Some(ref mut pm) = self.progress_manager {
            pm.update_stage(index, stage);
        }
    }
}
