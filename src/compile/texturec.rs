use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Command;

use anyhow::Result;

use crate::compile::TextureCompiler;
use crate::config::ConverterConfig;
use crate::data::job::ConversionJob;
use crate::error::{Error, ErrorKind};

/// Invokes bgfx's `texturec` once per job.
pub struct Texturec {
    tool_path: PathBuf,
    output_dir: PathBuf,
    output_extension: String,
}

impl Texturec {
    pub fn new(config: &ConverterConfig) -> Result<Self> {
        if !config.tool_path.is_file() {
            return Err(Error::configuration(format!(
                "The texture compiler was not found at {}",
                config.tool_path.display()
            ))
            .into());
        }

        Ok(Self {
            tool_path: config.tool_path.clone(),
            output_dir: config.output_dir.clone(),
            output_extension: config.output_extension.clone(),
        })
    }

    /// `-f <input> -o <output> [-t <format>] -m [--linear] [-n]`
    pub fn arguments(&self, job: &ConversionJob) -> Vec<OsString> {
        let mut arguments: Vec<OsString> = vec![
            "-f".into(),
            job.source().into(),
            "-o".into(),
            job.output_path(&self.output_dir, &self.output_extension)
                .into(),
        ];

        if let Some(pixel_format) = job.pixel_format() {
            arguments.push("-t".into());
            arguments.push(pixel_format.into());
        }

        arguments.push("-m".into());

        if job.is_linear() {
            arguments.push("--linear".into());
        }

        if job.is_normal_map() {
            arguments.push("-n".into());
        }

        arguments
    }
}

impl TextureCompiler for Texturec {
    fn compile(&mut self, job: &ConversionJob) -> Result<()> {
        let arguments = self.arguments(job);

        log::info!("Parsing: {}", job.source().display());
        log::debug!(
            "Using arguments: {} {}",
            self.tool_path.display(),
            arguments
                .iter()
                .map(|argument| argument.to_string_lossy())
                .collect::<Vec<_>>()
                .join(" ")
        );

        let status = match Command::new(&self.tool_path).args(&arguments).status() {
            Ok(status) => status,
            Err(error) => {
                return Err(Error::new(
                    ErrorKind::ToolFailure,
                    format!("Unable to start {}: {error}", self.tool_path.display()),
                )
                .into())
            }
        };

        if !status.success() {
            return Err(Error::new(
                ErrorKind::ToolFailure,
                format!(
                    "{} failed on {} ({status})",
                    self.tool_path.display(),
                    job.source().display()
                ),
            )
            .into());
        }

        Ok(())
    }
}
