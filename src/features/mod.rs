//! Feature table loading and composite score computation

/// Min-max normalization and row-wise composite averaging
pub mod composite;
/// Per-slide CSV feature table loading
pub mod table;

pub use table::FeatureTable;
