//! CLI entry point for the Wang tile period search tool

use clap::Parser;
use periodtile::io::cli::{self, Cli};

fn main() -> periodtile::Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
