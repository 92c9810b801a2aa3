use std::path::Path;

use anyhow::Result;

use crate::data::job::{ConversionJob, TextureRole};
use crate::resource::folder::TextureFolder;

struct FilenameCategory {
    fragments: &'static [&'static str],
    role: TextureRole,
}

const CATEGORIES: [FilenameCategory; 3] = [
    FilenameCategory {
        fragments: &["_diffuse", "_baseColor", "_albedo"],
        role: TextureRole::COLOR,
    },
    FilenameCategory {
        fragments: &["_normal"],
        role: TextureRole::NORMAL_MAP,
    },
    FilenameCategory {
        fragments: &[
            "_metallicRoughness",
            "_metalRoughness",
            "_occlusionRoughnessMetallic",
        ],
        role: TextureRole::DATA,
    },
];

/// Finds textures in a folder by the role suffix in their file names.
///
/// A file whose name matches several fragments gets one job per match.
pub struct FilenameResolver<'a> {
    output_extension: &'a str,
    pixel_format: Option<&'a str>,
}

impl<'a> FilenameResolver<'a> {
    pub fn new(output_extension: &'a str, pixel_format: Option<&'a str>) -> Self {
        Self {
            output_extension,
            pixel_format,
        }
    }

    pub fn resolve(&self, folder: &impl TextureFolder) -> Result<Vec<ConversionJob>> {
        let mut jobs = Vec::new();

        for category in &CATEGORIES {
            for fragment in category.fragments {
                for path in folder.files_containing(fragment)? {
                    if self.is_compiled(&path) {
                        continue;
                    }

                    jobs.push(ConversionJob::new(
                        path,
                        category.role,
                        self.pixel_format.map(String::from),
                    ));
                }
            }
        }

        Ok(jobs)
    }

    fn is_compiled(&self, path: &Path) -> bool {
        path.extension()
            .is_some_and(|extension| extension.eq_ignore_ascii_case(self.output_extension))
    }
}
