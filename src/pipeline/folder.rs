use anyhow::Result;

use crate::compile::{compile_all, TextureCompiler};
use crate::config::ConverterConfig;
use crate::pipeline::{prepare_output_dir, RunSummary};
use crate::resolve::filename::FilenameResolver;
use crate::resource::folder::TextureFolder;

/// Converts every texture in `folder` whose file name marks its role.
pub fn convert_folder(
    folder: &impl TextureFolder,
    config: &ConverterConfig,
    compiler: &mut impl TextureCompiler,
) -> Result<RunSummary> {
    prepare_output_dir(&config.output_dir)?;

    let jobs = FilenameResolver::new(&config.output_extension, config.pixel_format.as_deref())
        .resolve(folder)?;

    log::info!(
        "Found {} textures to convert in {}",
        jobs.len(),
        folder.root().display()
    );

    Ok(RunSummary {
        converted: compile_all(compiler, &jobs)?,
        ..Default::default()
    })
}
