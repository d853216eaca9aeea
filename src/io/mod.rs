//! Input/output operations, CLI orchestration, and error handling

/// Command-line interface and per-slide orchestration
pub mod cli;
/// Rendering constants and configuration defaults
pub mod configuration;
/// Error types for table loading, slide access, and rendering
pub mod error;
/// Multi-slide progress tracking
pub mod progress;
