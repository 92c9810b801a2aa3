use std::path::PathBuf;

use clap::Parser;
use texture_prep::config::DEFAULT_TEXTUREC_PATH;

/// Compiles the textures of a glTF asset with texturec and writes a copy of the asset that uses them
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the .gltf file whose textures should be converted
    pub gltf_path: PathBuf,

    /// Directory that receives the converted textures, the rewritten .gltf and its .bin files
    pub output_path: PathBuf,

    /// Path to the texturec executable
    #[arg(short, long, default_value = DEFAULT_TEXTUREC_PATH)]
    pub texturec_path: PathBuf,

    /// Pixel format passed to texturec
    #[arg(short, long, default_value = "RGBA8")]
    pub pixel_format: String,
}

impl From<Cli> for texture_prep::args::GltfArgs {
    fn from(value: Cli) -> Self {
        texture_prep::args::GltfArgs {
            gltf: value.gltf_path,
            output: value.output_path,
            texturec: value.texturec_path,
            pixel_format: Some(value.pixel_format),
        }
    }
}
