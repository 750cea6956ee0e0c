//! CLI entry point for the full-spectrum growth generator

use chromagrow::io::cli::{Cli, GrowthRunner};
use clap::Parser;

fn main() -> chromagrow::Result<()> {
    let cli = Cli::parse();
    let mut runner = GrowthRunner::new(cli);
    runner.run()
}
