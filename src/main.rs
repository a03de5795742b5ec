//! CLI entry point for the tile sheet converter

use clap::Parser;
use tilesheet360::io::cli::{Cli, FileProcessor};
use tilesheet360::io::logging;

fn main() -> tilesheet360::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);
    let mut processor = FileProcessor::new(cli);
    processor.process()
}
