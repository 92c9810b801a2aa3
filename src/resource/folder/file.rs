use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::error::Error;
use crate::resource::folder::TextureFolder;

pub struct FileSystemTextureFolder {
    root: PathBuf,
}

impl FileSystemTextureFolder {
    pub fn from_path(root: &Path) -> Result<Self> {
        if !root.is_dir() {
            return Err(Error::configuration(format!(
                "The given path is not a directory: {}",
                root.display()
            ))
            .into());
        }

        Ok(Self {
            root: root.to_path_buf(),
        })
    }
}

impl TextureFolder for FileSystemTextureFolder {
    fn root(&self) -> &Path {
        &self.root
    }

    fn files_containing(&self, fragment: &str) -> Result<Vec<PathBuf>> {
        let root = match self.root.to_str() {
            Some(root) => root,
            None => {
                return Err(Error::configuration(format!(
                    "The given path is not valid UTF-8: {}",
                    self.root.display()
                ))
                .into())
            }
        };

        let pattern = format!(
            "{}/*{}*",
            glob::Pattern::escape(root),
            glob::Pattern::escape(fragment)
        );
        let options = glob::MatchOptions {
            case_sensitive: true,
            require_literal_separator: true,
            require_literal_leading_dot: false,
        };

        let mut files = Vec::new();
        for entry in glob::glob_with(&pattern, options)
            .with_context(|| format!("Invalid search pattern {pattern}"))?
        {
            let path = entry?;
            if path.is_file() {
                files.push(path);
            }
        }

        files.sort();

        Ok(files)
    }
}
