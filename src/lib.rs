use anyhow::Result;

use crate::args::{FolderArgs, GltfArgs};
use crate::compile::texturec::Texturec;
use crate::config::{ConverterConfig, LogWarnings};
use crate::pipeline::folder::convert_folder;
use crate::pipeline::gltf::convert_gltf;
use crate::pipeline::RunSummary;
use crate::resource::folder::file::FileSystemTextureFolder;
use crate::resource::gltf::document::file::FileSystemSceneDocument;

pub mod args;
pub mod compile;
pub mod config;
pub mod data;
pub mod error;
pub mod pipeline;
pub mod resolve;
pub mod resource;
pub mod rewrite;

pub fn run_gltf(args: GltfArgs) -> Result<RunSummary> {
    init_logging();

    let mut document = FileSystemSceneDocument::from_path(&args.gltf)?;
    let config =
        ConverterConfig::new(args.texturec, args.output).with_pixel_format(args.pixel_format);
    let mut compiler = Texturec::new(&config)?;

    let summary = convert_gltf(&mut document, &config, &mut compiler, &LogWarnings)?;
    log::info!("{summary}");

    Ok(summary)
}

pub fn run_folder(args: FolderArgs) -> Result<RunSummary> {
    init_logging();

    let folder = FileSystemTextureFolder::from_path(&args.input)?;
    let output = args.output.unwrap_or_else(|| args.input.clone());
    let config = ConverterConfig::new(args.texturec, output).with_pixel_format(args.pixel_format);
    let mut compiler = Texturec::new(&config)?;

    let summary = convert_folder(&folder, &config, &mut compiler)?;
    log::info!("{summary}");

    Ok(summary)
}

fn init_logging() {
    // A second run in the same process keeps the first logger.
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
