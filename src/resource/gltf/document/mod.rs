use std::ffi::OsStr;
use std::path::Path;

use anyhow::Result;
use serde_json::Value;

use crate::data::lookup::lookup;
use crate::error::Error;

pub mod file;

/// A parsed glTF document, kept as a generic JSON tree so that it can be written back unchanged
/// apart from the image URIs.
pub trait SceneDocument {
    fn json(&self) -> &Value;
    fn json_mut(&mut self) -> &mut Value;
    /// Directory image URIs are relative to.
    fn root(&self) -> &Path;
    fn file_name(&self) -> &OsStr;

    fn materials(&self) -> Result<&[Value]> {
        match lookup(self.json(), &["materials"]) {
            None | Some(Value::Null) => Ok(&[][..]),
            Some(Value::Array(materials)) => Ok(materials.as_slice()),
            Some(_) => Err(Error::malformed(String::from("`materials` is not an array")).into()),
        }
    }

    fn image_index_of_texture(&self, texture_id: usize) -> Result<usize> {
        let texture = array_entry(self.json(), "textures", texture_id)?;

        match lookup(texture, &["source"]).and_then(as_index) {
            Some(image_id) => Ok(image_id),
            None => Err(Error::malformed(format!(
                "Texture {texture_id} has no valid `source` image index"
            ))
            .into()),
        }
    }

    fn image_uri(&self, image_id: usize) -> Result<&str> {
        let image = array_entry(self.json(), "images", image_id)?;

        match lookup(image, &["uri"]).and_then(Value::as_str) {
            Some(uri) => Ok(uri),
            None => Err(Error::malformed(format!(
                "Image {image_id} has no `uri`; embedded images are not supported"
            ))
            .into()),
        }
    }

    fn set_image_uri(&mut self, image_id: usize, uri: &str) -> Result<()> {
        let image = match self
            .json_mut()
            .get_mut("images")
            .and_then(|images| images.get_mut(image_id))
            .and_then(Value::as_object_mut)
        {
            Some(image) => image,
            None => {
                return Err(
                    Error::malformed(format!("No image exists with the given ID: {image_id}"))
                        .into(),
                )
            }
        };

        image.insert(String::from("uri"), Value::String(uri.to_string()));

        Ok(())
    }
}

pub fn as_index(value: &Value) -> Option<usize> {
    value.as_u64().and_then(|index| usize::try_from(index).ok())
}

fn array_entry<'a>(root: &'a Value, array: &str, id: usize) -> Result<&'a Value> {
    let entries = match lookup(root, &[array]).and_then(Value::as_array) {
        Some(entries) => entries,
        None => {
            return Err(Error::malformed(format!(
                "The document has no `{array}` array, but entry {id} is referenced"
            ))
            .into())
        }
    };

    match entries.get(id) {
        Some(entry) => Ok(entry),
        None => Err(Error::malformed(format!(
            "`{array}` has {} entries, index {id} is out of range",
            entries.len()
        ))
        .into()),
    }
}
