//! CLI entry point for whole-slide histomic feature heatmap rendering

use clap::Parser;
use slideheat::io::cli::{Cli, SlideProcessor};

fn main() -> slideheat::Result<()> {
    let cli = Cli::parse();
    let mut processor = SlideProcessor::new(cli);
    processor.process()
}
