use std::ffi::{OsStr, OsString};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use crate::error::Error;
use crate::resource::gltf::document::SceneDocument;

pub struct FileSystemSceneDocument {
    json: Value,
    root: PathBuf,
    file_name: OsString,
}

impl FileSystemSceneDocument {
    pub fn from_path(gltf_path: &Path) -> Result<Self> {
        if !gltf_path.is_file() {
            return Err(Error::configuration(format!(
                "The given path is not a file: {}",
                gltf_path.display()
            ))
            .into());
        }

        let contents = std::fs::read_to_string(gltf_path)
            .with_context(|| format!("Unable to read {}", gltf_path.display()))?;

        let json = match serde_json::from_str(&contents) {
            Ok(json) => json,
            Err(error) => {
                return Err(Error::malformed(format!(
                    "{} is not valid JSON: {error}",
                    gltf_path.display()
                ))
                .into())
            }
        };

        Self::from_json(json, gltf_path)
    }

    /// Wraps an already parsed document as if it had been loaded from `gltf_path`.
    pub fn from_json(json: Value, gltf_path: &Path) -> Result<Self> {
        let file_name = match gltf_path.file_name() {
            Some(file_name) => file_name.to_os_string(),
            None => {
                return Err(Error::configuration(format!(
                    "The given path has no file name: {}",
                    gltf_path.display()
                ))
                .into())
            }
        };

        let root = match gltf_path.parent() {
            Some(root) if !root.as_os_str().is_empty() => root.to_path_buf(),
            _ => PathBuf::from("."),
        };

        Ok(Self {
            json,
            root,
            file_name,
        })
    }
}

impl SceneDocument for FileSystemSceneDocument {
    fn json(&self) -> &Value {
        &self.json
    }

    fn json_mut(&mut self) -> &mut Value {
        &mut self.json
    }

    fn root(&self) -> &Path {
        &self.root
    }

    fn file_name(&self) -> &OsStr {
        &self.file_name
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::error::{kind_of, ErrorKind};

    fn document(json: Value) -> FileSystemSceneDocument {
        FileSystemSceneDocument::from_json(json, Path::new("assets/scene.gltf")).unwrap()
    }

    #[test]
    fn splits_root_and_file_name() {
        let document = document(json!({}));

        assert_eq!(document.root(), Path::new("assets"));
        assert_eq!(document.file_name(), OsStr::new("scene.gltf"));
        assert!(document.materials().unwrap().is_empty());
    }

    #[test]
    fn bare_file_name_resolves_against_current_directory() {
        let document =
            FileSystemSceneDocument::from_json(json!({}), Path::new("scene.gltf")).unwrap();

        assert_eq!(document.root(), Path::new("."));
    }

    #[test]
    fn follows_texture_to_image_uri() {
        let document = document(json!({
            "textures": [{ "source": 1 }],
            "images": [{ "uri": "a.png" }, { "uri": "textures/b.png" }]
        }));

        let image_id = document.image_index_of_texture(0).unwrap();
        assert_eq!(image_id, 1);
        assert_eq!(document.image_uri(image_id).unwrap(), "textures/b.png");
    }

    #[test]
    fn out_of_range_texture_is_malformed() {
        let document = document(json!({ "textures": [{ "source": 0 }], "images": [] }));

        let error = document.image_index_of_texture(4).unwrap_err();
        assert_eq!(kind_of(&error), Some(ErrorKind::MalformedDocument));

        let error = document.image_uri(0).unwrap_err();
        assert_eq!(kind_of(&error), Some(ErrorKind::MalformedDocument));
    }

    #[test]
    fn buffer_view_images_are_rejected() {
        let document = document(json!({
            "images": [{ "bufferView": 2, "mimeType": "image/png" }]
        }));

        assert!(document.image_uri(0).is_err());
    }

    #[test]
    fn set_image_uri_keeps_other_fields() {
        let mut document = document(json!({
            "images": [{ "uri": "a.png", "name": "albedo" }]
        }));

        document.set_image_uri(0, "a.dds").unwrap();

        assert_eq!(
            document.json()["images"][0],
            json!({ "uri": "a.dds", "name": "albedo" })
        );
        assert!(document.set_image_uri(1, "b.dds").is_err());
    }

    #[test]
    fn missing_file_is_a_configuration_error() {
        let error = FileSystemSceneDocument::from_path(Path::new("does/not/exist.gltf"))
            .err()
            .unwrap();

        assert_eq!(kind_of(&error), Some(ErrorKind::Configuration));
    }
}
