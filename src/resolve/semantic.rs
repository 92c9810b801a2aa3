use anyhow::Result;
use serde_json::Value;

use crate::config::WarningSink;
use crate::data::job::{
    replace_uri_extension, ConversionJob, ImageReference, ResolvedTexture, TextureRole,
};
use crate::data::lookup::lookup;
use crate::error::Error;
use crate::resource::gltf::document::{as_index, SceneDocument};

const PBR_METALLIC_ROUGHNESS: &str = "pbrMetallicRoughness";

struct TextureSlot {
    name: &'static str,
    /// Key path relative to the material, or to its metallic-roughness group when `in_pbr_group`.
    keys: &'static [&'static str],
    in_pbr_group: bool,
    role: TextureRole,
}

const TEXTURE_SLOTS: [TextureSlot; 5] = [
    TextureSlot {
        name: "base color",
        keys: &["baseColorTexture", "index"],
        in_pbr_group: true,
        role: TextureRole::COLOR,
    },
    TextureSlot {
        name: "metallic-roughness",
        keys: &["metallicRoughnessTexture", "index"],
        in_pbr_group: true,
        role: TextureRole::DATA,
    },
    TextureSlot {
        name: "normal",
        keys: &["normalTexture", "index"],
        in_pbr_group: false,
        role: TextureRole::NORMAL_MAP,
    },
    TextureSlot {
        name: "occlusion",
        keys: &["occlusionTexture", "index"],
        in_pbr_group: false,
        role: TextureRole::DATA,
    },
    TextureSlot {
        name: "emissive",
        keys: &["emissiveTexture", "index"],
        in_pbr_group: false,
        role: TextureRole::COLOR,
    },
];

/// Finds the textures referenced by a glTF document's materials.
pub struct SemanticResolver<'a> {
    output_extension: &'a str,
    pixel_format: Option<&'a str>,
    warnings: &'a dyn WarningSink,
}

impl<'a> SemanticResolver<'a> {
    pub fn new(
        output_extension: &'a str,
        pixel_format: Option<&'a str>,
        warnings: &'a dyn WarningSink,
    ) -> Self {
        Self {
            output_extension,
            pixel_format,
            warnings,
        }
    }

    /// One entry per filled slot, material by material, in slot order.
    pub fn resolve(&self, document: &impl SceneDocument) -> Result<Vec<ResolvedTexture>> {
        let mut resolved = Vec::new();

        for (material_id, material) in document.materials()?.iter().enumerate() {
            let pbr_group = match lookup(material, &[PBR_METALLIC_ROUGHNESS]) {
                None | Some(Value::Null) => {
                    self.warnings.warn(&format!(
                        "Material with index {material_id} does not have PBR properties"
                    ));
                    None
                }
                Some(group) => Some(group),
            };

            for slot in &TEXTURE_SLOTS {
                let parent = match (slot.in_pbr_group, pbr_group) {
                    (false, _) => material,
                    (true, Some(group)) => group,
                    (true, None) => continue,
                };

                let texture_id = match lookup(parent, slot.keys) {
                    None | Some(Value::Null) => continue,
                    Some(value) => match as_index(value) {
                        Some(texture_id) => texture_id,
                        None => {
                            return Err(Error::malformed(format!(
                                "Material {material_id} has an invalid {} texture index: {value}",
                                slot.name
                            ))
                            .into())
                        }
                    },
                };

                resolved.push(self.resolve_texture(document, texture_id, slot.role)?);
            }
        }

        Ok(resolved)
    }

    fn resolve_texture(
        &self,
        document: &impl SceneDocument,
        texture_id: usize,
        role: TextureRole,
    ) -> Result<ResolvedTexture> {
        let image_id = document.image_index_of_texture(texture_id)?;
        let uri = document.image_uri(image_id)?;

        if uri.starts_with("data:") {
            return Err(Error::malformed(format!(
                "Image {image_id} is embedded as a data URI, which is not supported"
            ))
            .into());
        }

        Ok(ResolvedTexture {
            job: ConversionJob::new(
                document.root().join(uri),
                role,
                self.pixel_format.map(String::from),
            ),
            image: ImageReference {
                image_index: image_id,
                new_uri: replace_uri_extension(uri, self.output_extension),
            },
        })
    }
}
