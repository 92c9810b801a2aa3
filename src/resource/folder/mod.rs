use std::path::{Path, PathBuf};

use anyhow::Result;

pub mod file;

/// A flat directory of source textures.
pub trait TextureFolder {
    fn root(&self) -> &Path;

    /// Files directly inside the folder whose name contains `fragment`, in sorted order.
    fn files_containing(&self, fragment: &str) -> Result<Vec<PathBuf>>;
}
