use std::cell::RefCell;
use std::path::PathBuf;

pub const OUTPUT_EXTENSION: &str = "dds";

#[cfg(windows)]
pub const DEFAULT_TEXTUREC_PATH: &str = "./tools/texturec.exe";
#[cfg(not(windows))]
pub const DEFAULT_TEXTUREC_PATH: &str = "./tools/texturec";

/// Settings shared by the resolvers and the compiler invocation.
#[derive(Debug, Clone)]
pub struct ConverterConfig {
    pub tool_path: PathBuf,
    pub output_dir: PathBuf,
    /// Without the leading dot.
    pub output_extension: String,
    /// Passed to the compiler as `-t` when set.
    pub pixel_format: Option<String>,
}

impl ConverterConfig {
    pub fn new(tool_path: PathBuf, output_dir: PathBuf) -> Self {
        Self {
            tool_path,
            output_dir,
            output_extension: String::from(OUTPUT_EXTENSION),
            pixel_format: None,
        }
    }

    pub fn with_pixel_format(mut self, pixel_format: Option<String>) -> Self {
        self.pixel_format = pixel_format;
        self
    }
}

/// Receives non-fatal diagnostics produced while resolving textures.
pub trait WarningSink {
    fn warn(&self, message: &str);
}

/// Forwards warnings to the `log` facade.
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }
}

/// Keeps warnings in memory, for callers that want to inspect them afterwards.
#[derive(Default)]
pub struct CollectedWarnings {
    messages: RefCell<Vec<String>>,
}

impl CollectedWarnings {
    pub fn messages(&self) -> Vec<String> {
        self.messages.borrow().clone()
    }
}

impl WarningSink for CollectedWarnings {
    fn warn(&self, message: &str) {
        self.messages.borrow_mut().push(message.to_string());
    }
}
