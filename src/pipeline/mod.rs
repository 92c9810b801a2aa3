use std::path::Path;

use anyhow::{Context, Result};

pub mod folder;
pub mod gltf;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub converted: usize,
    pub rewritten_images: usize,
    pub copied_payloads: usize,
}

impl std::fmt::Display for RunSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} textures converted, {} image URIs rewritten, {} payload files copied",
            self.converted, self.rewritten_images, self.copied_payloads
        )
    }
}

/// Creating a directory that already exists is fine.
fn prepare_output_dir(output_dir: &Path) -> Result<()> {
    std::fs::create_dir_all(output_dir)
        .with_context(|| format!("Unable to create {}", output_dir.display()))
}
