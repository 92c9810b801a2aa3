use anyhow::Result;

use crate::data::job::ConversionJob;

pub mod texturec;

/// Turns a source image into a compiled texture.
pub trait TextureCompiler {
    /// Blocks until the texture for `job` has been written.
    fn compile(&mut self, job: &ConversionJob) -> Result<()>;
}

/// Runs every job in order, stopping at the first failure.
pub fn compile_all(compiler: &mut impl TextureCompiler, jobs: &[ConversionJob]) -> Result<usize> {
    for job in jobs {
        compiler.compile(job)?;
    }

    Ok(jobs.len())
}
