//! Rendering constants and runtime configuration defaults

/// Column holding the precomputed per-tile saliency score
pub const SALIENCY_COLUMN: &str = "Saliency.SaliencyScore";

/// Name of the derived composite score column appended to each table
pub const COMPOSITE_COLUMN: &str = "CompositeFeature";

/// Short display name used in output filenames for the composite score
pub const COMPOSITE_SHORT_NAME: &str = "AvgFeat";

/// Configured histomic features as (raw column name, display name) pairs
pub const FEATURE_LIST: [(&str, &str); 9] = [
    (
        "NuclearStaining.HistEnergy.StromalSuperclass.Mean",
        "HistEnergyOfStromalNuclei",
    ),
    (
        "CytoplasmicStaining.Std.StromalSuperclass.Mean",
        "CytoplasmicStainingStdOfStromalCells",
    ),
    (
        "CytoplasmicTexture.Mag.Std.StromalSuperclass.Mean",
        "TextureMagnitudeStdOfStromalCells",
    ),
    (
        "CytoplasmicTexture.SumOfSquares.Mean.StromalSuperclass.Mean",
        "SumOfSquaresMeanOfStromalTextures",
    ),
    (
        "CytoplasmicTexture.SumOfSquares.Range.StromalSuperclass.Mean",
        "SumOfSquaresRangeOfStromalTextures",
    ),
    (
        "CytoplasmicTexture.SumAverage.Range.StromalSuperclass.Mean",
        "SumAverageRangeOfStromalTextures",
    ),
    (
        "CytoplasmicTexture.SumVariance.Mean.StromalSuperclass.Mean",
        "SumVarianceMeanOfStromalTextures",
    ),
    (
        "CytoplasmicTexture.SumOfSquares.Range.StromalSuperclass.Std",
        "SumOfSquaresRangeStdOfStromalTextures",
    ),
    (
        "CytoplasmicTexture.SumAverage.Range.StromalSuperclass.Std",
        "SumAverageRangeStdOfStromalTextures",
    ),
];

// Slide access settings
/// Longest side of the cached slide thumbnail, in pixels
pub const THUMBNAIL_MAX_DIMENSION: u32 = 1024;

/// Microns per pixel of the slide base resolution
pub const SLIDE_BASE_MPP: f64 = 0.25;

/// Target microns per pixel for exported tile crops
pub const TILE_EXPORT_MPP: f64 = 0.5;

// Figure layout settings
/// Opacity of painted heatmap cells over the thumbnail
pub const HEATMAP_ALPHA: f32 = 0.95;

/// Width of the vertical colorbar strip in pixels
pub const COLORBAR_WIDTH: u32 = 24;

/// White margin around composed figure panels in pixels
pub const FIGURE_MARGIN: u32 = 16;

/// Horizontal gap between adjacent figure panels in pixels
pub const PANEL_GAP: u32 = 16;

/// Line width of the tile location marker on the thumbnail
pub const MARKER_LINE_WIDTH: u32 = 2;

// Progress bar display settings
/// Threshold for switching to batch progress mode
pub const MAX_INDIVIDUAL_PROGRESS_BARS: usize = 5;

// Default values for configurable parameters
/// Default number of ranked tiles to export per slide
pub const DEFAULT_TOPK: usize = 20;

/// Default side length of exported square tile crops, in pixels
pub const DEFAULT_TILE_SIZE: u32 = 512;

/// Default whole-slide image file extension
pub const DEFAULT_WSI_EXTENSION: &str = "svs";

// Output settings
/// Filename of the per-slide feature means summary table
pub const MEANS_FILENAME: &str = "feature_means.csv";
