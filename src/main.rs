//! CLI entry point for the tile collage builder

use clap::Parser;
use tilestitch::io::cli::{Cli, FolderProcessor};
use tilestitch::io::logging::init_logging;

fn main() -> tilestitch::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);
    let mut processor = FolderProcessor::new(cli);
    processor.process().map(drop)
}
