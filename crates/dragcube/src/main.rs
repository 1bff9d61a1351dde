//! Headless driver for an interactive 3x3x3 twisty puzzle cube.
//!
//! Each invocation loads the persisted cube, runs one command through the
//! same controller an interactive front end would use, and prints the result.

mod animator;
mod cli;

fn main() -> eyre::Result<()> {
    use clap::Parser;

    let args = cli::Args::parse();

    // Initialize logging.
    env_logger::builder().init();

    color_eyre::install()?;

    pollster::block_on(cli::exec(args))
}
