use std::path::PathBuf;

use clap::Parser;
use texture_prep::config::DEFAULT_TEXTUREC_PATH;

/// Compiles every texture in a folder with texturec, picking flags from the file name suffix
/// (`_diffuse`, `_normal`, `_metallicRoughness`, ...)
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Folder containing the source textures
    pub input_path: PathBuf,

    /// Where the converted textures go; defaults to the input folder
    pub output_path: Option<PathBuf>,

    /// Path to the texturec executable
    #[arg(short, long, default_value = DEFAULT_TEXTUREC_PATH)]
    pub texturec_path: PathBuf,

    /// Pixel format passed to texturec; texturec picks one when omitted
    #[arg(short, long)]
    pub pixel_format: Option<String>,
}

impl From<Cli> for texture_prep::args::FolderArgs {
    fn from(value: Cli) -> Self {
        texture_prep::args::FolderArgs {
            input: value.input_path,
            output: value.output_path,
            texturec: value.texturec_path,
            pixel_format: value.pixel_format,
        }
    }
}
