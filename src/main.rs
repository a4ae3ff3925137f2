use aeroguard::cli::{run, Cli};
use aeroguard::error::Result;
use clap::Parser;

fn main() -> Result<()> {
    let cli = Cli::parse();
    run(cli)
}
