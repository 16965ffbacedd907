//! tocify CLI — sectioned plain text to HTML, locally.
//!
//! Reads a text file whose heading lines start with a repeatable marker
//! character and writes a single HTML document with a linked table of
//! contents.

mod commands;

use clap::Parser;
use color_eyre::eyre::Result;

use commands::Cli;

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    commands::init_tracing(&cli);
    commands::run(cli)
}
