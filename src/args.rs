use std::path::PathBuf;

pub struct GltfArgs {
    pub gltf: PathBuf,
    pub output: PathBuf,
    pub texturec: PathBuf,
    pub pixel_format: Option<String>,
}

pub struct FolderArgs {
    pub input: PathBuf,
    /// Defaults to `input`.
    pub output: Option<PathBuf>,
    pub texturec: PathBuf,
    pub pixel_format: Option<String>,
}
