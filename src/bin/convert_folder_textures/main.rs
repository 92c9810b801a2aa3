use clap::Parser;

use crate::cli::Cli;
use texture_prep::run_folder;

mod cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    run_folder(cli.into())?;

    Ok(())
}
