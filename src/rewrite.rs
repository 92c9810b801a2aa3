use std::fs::OpenOptions;
use std::io::{BufWriter, ErrorKind as IoErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::data::job::ImageReference;
use crate::error::{Error, ErrorKind};
use crate::resource::gltf::document::SceneDocument;

/// Points every referenced image at its compiled texture. Returns the number of URIs written.
pub fn apply_image_references<'r>(
    document: &mut impl SceneDocument,
    references: impl IntoIterator<Item = &'r ImageReference>,
) -> Result<usize> {
    let mut rewritten = 0;

    for reference in references {
        document.set_image_uri(reference.image_index, &reference.new_uri)?;
        rewritten += 1;
    }

    Ok(rewritten)
}

/// Fails with an output conflict if the document already exists in `output_dir`.
///
/// Checked before any texture is compiled so that a rerun cannot clobber earlier outputs.
pub fn ensure_document_absent(document: &impl SceneDocument, output_dir: &Path) -> Result<()> {
    let output_path = output_dir.join(document.file_name());

    if output_path.exists() {
        return Err(output_conflict(&output_path).into());
    }

    Ok(())
}

/// Serializes the document into `output_dir` under its original file name.
///
/// Never overwrites: an existing file at the destination is an output conflict.
pub fn write_document(document: &impl SceneDocument, output_dir: &Path) -> Result<PathBuf> {
    let output_path = output_dir.join(document.file_name());

    let file = match OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&output_path)
    {
        Ok(file) => file,
        Err(error) if error.kind() == IoErrorKind::AlreadyExists => {
            return Err(output_conflict(&output_path).into())
        }
        Err(error) => {
            return Err(error).with_context(|| format!("Unable to create {}", output_path.display()))
        }
    };

    let mut writer = BufWriter::new(file);
    serde_json::to_writer(&mut writer, document.json())
        .with_context(|| format!("Unable to write {}", output_path.display()))?;
    writer.flush()?;

    Ok(output_path)
}

fn output_conflict(output_path: &Path) -> Error {
    Error::new(
        ErrorKind::OutputConflict,
        format!("Refusing to overwrite {}", output_path.display()),
    )
}
