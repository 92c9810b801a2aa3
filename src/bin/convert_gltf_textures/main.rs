use clap::Parser;

use crate::cli::Cli;
use texture_prep::run_gltf;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_gltf(cli.into())?;

    Ok(())
}
