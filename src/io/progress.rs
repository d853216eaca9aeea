//! Multi-slide progress tracking with automatic batching for large sets

use crate::io::configuration::MAX_INDIVIDUAL_PROGRESS_BARS;
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};
use std::sync::LazyLock;

/// Coordinates progress display for batch slide processing
///
/// Automatically switches between individual progress bars (for small batches)
/// and a single batch progress bar (for large batches) based on slide count
pub struct ProgressManager {
    multi_progress: MultiProgress,
    batch_bar: Option<ProgressBar>,
    slide_bars: Vec<ProgressBar>,
    /// Stores (`slide_name`, `current_stage`, `stage_count`) for rolling window display
    slide_states: Vec<(String, usize, usize)>,
}

impl Default for ProgressManager {
    fn default() -> Self {
        Self::new()
    }
}

static STAGE_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("{msg} [{bar:30.cyan/blue}] {prefix}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

static BATCH_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_bar()
        .template("[{elapsed_precise}] Slides: [{bar:40.cyan/blue}] {pos}/{len}")
        .unwrap_or_else(|_| ProgressStyle::default_bar())
});

impl ProgressManager {
    /// Create a new progress manager
    pub fn new() -> Self {
        Self {
            multi_progress: MultiProgress::new(),
            batch_bar: None,
            slide_bars: Vec::new(),
            slide_states: Vec::new(),
        }
    }

    /// Initialize progress bars based on slide count
    pub fn initialize(&mut self, slide_count: usize) {
        // Switch to batch mode for large slide sets to avoid terminal spam
        if slide_count > MAX_INDIVIDUAL_PROGRESS_BARS + 1 {
            let batch_bar = ProgressBar::new(slide_count as u64);
            batch_bar.set_style(BATCH_STYLE.clone());
            self.batch_bar = Some(self.multi_progress.add(batch_bar));
        }

        let bars_to_create = slide_count.min(MAX_INDIVIDUAL_PROGRESS_BARS);
        for _ in 0..bars_to_create {
            let pb = ProgressBar::new(0);
            pb.set_style(STAGE_STYLE.clone());
            self.slide_bars.push(self.multi_progress.add(pb));
        }
    }

    /// Configure progress bar for a new slide
    pub fn start_slide(&mut self, index: usize, slide_name: &str, stage_count: usize) {
        if index >= self.slide_states.len() {
            self.slide_states.resize(index + 1, (String::new(), 0, 0));
        }
        if let Some(state) = self.slide_states.get_mut(index) {
            *state = (slide_name.to_string(), 0, stage_count);
        }
        self.update_bars();
    }

    /// Report completion of a pipeline stage for a slide
    pub fn update_stage(&mut self, slide_index: usize, stage: usize) {
        if let Some(state) = self.slide_states.get_mut(slide_index) {
            state.1 = stage;
        }
        self.update_bars();
    }

    /// Mark slide as completed and update batch progress
    pub fn complete_slide(&mut self, index: usize) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.inc(1);
        }

        if let Some(state) = self.slide_states.get_mut(index) {
            let stage_count = state.2;
            state.0 = format!("✓ {}", state.0);
            state.1 = stage_count;
        }
        self.update_bars();
    }

    /// Clean up all progress displays
    pub fn finish(&self) {
        if let Some(ref batch_bar) = self.batch_bar {
            batch_bar.finish_with_message("All slides processed");
        }
        let _ = self.multi_progress.clear();
    }

    /// Update all progress bars to show the last N active slides
    fn update_bars(&self) {
        // Find the slides that are in progress or recently completed
        let mut active_slides = Vec::new();
        for (i, (name, current, stages)) in self.slide_states.iter().enumerate() {
            if !name.is_empty() {
                active_slides.push((i, name.clone(), *current, *stages));
            }
        }

        // Take the last N slides
        let start_idx = active_slides
            .len()
            .saturating_sub(MAX_INDIVIDUAL_PROGRESS_BARS);
        let visible_slides = active_slides.get(start_idx..).unwrap_or(&[]);

        // Update each progress bar
        for (bar_idx, (_slide_idx, name, current, stages)) in visible_slides.iter().enumerate() {
            if let Some(bar) = self.slide_bars.get(bar_idx) {
                bar.set_length(*stages as u64);
                bar.set_position(*current as u64);
                bar.set_message(format!("{current}/{stages}"));
                bar.set_prefix(name.clone());
            }
        }

        // Clear any unused bars
        for bar_idx in visible_slides.len()..self.slide_bars.len() {
            if let Some(bar) = self.slide_bars.get(bar_idx) {
                bar.set_length(0);
                bar.set_position(0);
                bar.set_message(String::new());
                bar.set_prefix(String::new());
            }
        }
    }
}
