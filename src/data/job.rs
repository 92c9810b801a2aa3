use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    /// Perceptually (gamma) encoded data such as albedo or emissive color.
    NonLinear,
    /// Raw data such as normals, roughness or occlusion.
    Linear,
}

/// The conversion flags a texture role maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextureRole {
    pub color_space: ColorSpace,
    pub is_normal_map: bool,
}

impl TextureRole {
    pub const COLOR: Self = Self {
        color_space: ColorSpace::NonLinear,
        is_normal_map: false,
    };
    pub const DATA: Self = Self {
        color_space: ColorSpace::Linear,
        is_normal_map: false,
    };
    pub const NORMAL_MAP: Self = Self {
        color_space: ColorSpace::Linear,
        is_normal_map: true,
    };
}

/// A single source image to run through the texture compiler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    source: PathBuf,
    role: TextureRole,
    pixel_format: Option<String>,
}

impl ConversionJob {
    pub fn new(source: PathBuf, role: TextureRole, pixel_format: Option<String>) -> Self {
        Self {
            source,
            role,
            pixel_format,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn is_linear(&self) -> bool {
        self.role.color_space == ColorSpace::Linear
    }

    pub fn is_normal_map(&self) -> bool {
        self.role.is_normal_map
    }

    pub fn pixel_format(&self) -> Option<&str> {
        self.pixel_format.as_deref()
    }

    /// Where the compiled texture lands: the source file name with `extension`, inside `output_dir`.
    pub fn output_path(&self, output_dir: &Path, extension: &str) -> PathBuf {
        let file_name = self.source.file_name().unwrap_or(self.source.as_os_str());
        output_dir.join(file_name).with_extension(extension)
    }
}

/// An entry of the document's `images` array whose URI must be replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageReference {
    pub image_index: usize,
    pub new_uri: String,
}

/// A glTF texture slot resolved to both the job converting it and the image entry pointing at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedTexture {
    pub job: ConversionJob,
    pub image: ImageReference,
}

/// Replaces the extension of a relative URI, keeping any directories in front of the file name.
pub fn replace_uri_extension(uri: &str, extension: &str) -> String {
    let file_start = uri.rfind('/').map_or(0, |index| index + 1);
    let stem_end = match uri[file_start..].rfind('.') {
        Some(0) | None => uri.len(),
        Some(dot) => file_start + dot,
    };

    format!("{}.{extension}", &uri[..stem_end])
}
