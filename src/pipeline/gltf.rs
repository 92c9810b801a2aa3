use std::path::Path;

use anyhow::{Context, Result};

use crate::compile::{compile_all, TextureCompiler};
use crate::config::{ConverterConfig, WarningSink};
use crate::data::job::{ConversionJob, ImageReference};
use crate::pipeline::{prepare_output_dir, RunSummary};
use crate::resolve::semantic::SemanticResolver;
use crate::resource::gltf::document::SceneDocument;
use crate::error::Error;
use crate::rewrite::{apply_image_references, ensure_document_absent, write_document};

/// Converts every texture a glTF document's materials use, then writes the document with
/// rewritten image URIs next to them and copies its `.bin` payloads along.
pub fn convert_gltf(
    document: &mut impl SceneDocument,
    config: &ConverterConfig,
    compiler: &mut impl TextureCompiler,
    warnings: &dyn WarningSink,
) -> Result<RunSummary> {
    prepare_output_dir(&config.output_dir)?;
    ensure_document_absent(&*document, &config.output_dir)?;

    let resolver = SemanticResolver::new(
        &config.output_extension,
        config.pixel_format.as_deref(),
        warnings,
    );
    let (jobs, references): (Vec<ConversionJob>, Vec<ImageReference>) = resolver
        .resolve(&*document)?
        .into_iter()
        .map(|resolved| (resolved.job, resolved.image))
        .unzip();

    log::info!("Found {} textures to convert", jobs.len());

    let converted = compile_all(compiler, &jobs)?;
    let rewritten_images = apply_image_references(document, &references)?;

    let written = write_document(&*document, &config.output_dir)?;
    log::info!("Wrote {}", written.display());

    let copied_payloads = copy_payloads(document.root(), &config.output_dir)?;

    Ok(RunSummary {
        converted,
        rewritten_images,
        copied_payloads,
    })
}

/// Copies every `.bin` file below `root` into `output_dir`, flattened by file name.
///
/// Files already inside `output_dir` are skipped, so an output directory nested in `root` is
/// never copied onto itself.
fn copy_payloads(root: &Path, output_dir: &Path) -> Result<usize> {
    let root_str = match root.to_str() {
        Some(root_str) => root_str,
        None => {
            return Err(Error::configuration(format!(
                "The given path is not valid UTF-8: {}",
                root.display()
            ))
            .into())
        }
    };

    let output_dir_canonical = std::fs::canonicalize(output_dir)
        .with_context(|| format!("Unable to resolve {}", output_dir.display()))?;

    let pattern = format!("{}/**/*.bin", glob::Pattern::escape(root_str));
    let mut copied = 0;

    for entry in glob::glob(&pattern)? {
        let path = entry?;
        let file_name = match path.file_name() {
            Some(file_name) if path.is_file() => file_name,
            _ => continue,
        };

        let path_canonical = std::fs::canonicalize(&path)
            .with_context(|| format!("Unable to resolve {}", path.display()))?;
        if path_canonical.starts_with(&output_dir_canonical) {
            continue;
        }

        let destination = output_dir.join(file_name);
        std::fs::copy(&path, &destination).with_context(|| {
            format!(
                "Unable to copy {} to {}",
                path.display(),
                destination.display()
            )
        })?;
        log::info!("Copied {}", path.display());
        copied += 1;
    }

    Ok(copied)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use super::*;
    use crate::config::CollectedWarnings;
    use crate::error::{kind_of, ErrorKind};
    use crate::resource::gltf::document::file::FileSystemSceneDocument;

    /// Records jobs instead of running a tool, optionally failing on the n-th one.
    #[derive(Default)]
    struct RecordingCompiler {
        jobs: Vec<ConversionJob>,
        fail_at: Option<usize>,
    }

    impl TextureCompiler for RecordingCompiler {
        fn compile(&mut self, job: &ConversionJob) -> Result<()> {
            if self.fail_at == Some(self.jobs.len()) {
                return Err(
                    Error::new(ErrorKind::ToolFailure, String::from("exit 1")).into(),
                );
            }
            self.jobs.push(job.clone());
            Ok(())
        }
    }

    fn scene() -> Value {
        json!({
            "asset": { "version": "2.0" },
            "materials": [{
                "pbrMetallicRoughness": { "baseColorTexture": { "index": 0 } },
                "normalTexture": { "index": 1 }
            }],
            "textures": [{ "source": 0 }, { "source": 1 }],
            "images": [{ "uri": "a.png" }, { "uri": "b.png" }],
            "buffers": [{ "uri": "mesh.bin", "byteLength": 4 }]
        })
    }

    fn setup() -> (tempfile::TempDir, FileSystemSceneDocument, ConverterConfig) {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("input");
        std::fs::create_dir(&input).unwrap();
        std::fs::write(input.join("mesh.bin"), [1u8, 2, 3, 4]).unwrap();

        let document =
            FileSystemSceneDocument::from_json(scene(), &input.join("scene.gltf")).unwrap();
        let config = ConverterConfig::new(dir.path().join("texturec"), dir.path().join("output"))
            .with_pixel_format(Some(String::from("RGBA8")));

        (dir, document, config)
    }

    #[test]
    fn converts_rewrites_and_copies() {
        let (_dir, mut document, config) = setup();
        let mut compiler = RecordingCompiler::default();
        let warnings = CollectedWarnings::default();

        let summary = convert_gltf(&mut document, &config, &mut compiler, &warnings).unwrap();

        assert_eq!(
            summary,
            RunSummary {
                converted: 2,
                rewritten_images: 2,
                copied_payloads: 1,
            }
        );
        assert_eq!(compiler.jobs.len(), 2);
        assert!(compiler.jobs[1].is_normal_map());

        let written: Value = serde_json::from_str(
            &std::fs::read_to_string(config.output_dir.join("scene.gltf")).unwrap(),
        )
        .unwrap();
        assert_eq!(written["images"][0]["uri"], "a.dds");
        assert_eq!(written["images"][1]["uri"], "b.dds");
        assert_eq!(written["buffers"][0]["uri"], "mesh.bin");
        assert_eq!(
            std::fs::read(config.output_dir.join("mesh.bin")).unwrap(),
            vec![1u8, 2, 3, 4]
        );
    }

    #[test]
    fn tool_failure_leaves_no_document() {
        let (_dir, mut document, config) = setup();
        let mut compiler = RecordingCompiler {
            fail_at: Some(1),
            ..Default::default()
        };
        let warnings = CollectedWarnings::default();

        let error = convert_gltf(&mut document, &config, &mut compiler, &warnings).unwrap_err();

        assert_eq!(kind_of(&error), Some(ErrorKind::ToolFailure));
        assert_eq!(compiler.jobs.len(), 1);
        assert!(config.output_dir.is_dir());
        assert!(!config.output_dir.join("scene.gltf").exists());
        assert_eq!(document.json()["images"][0]["uri"], "a.png");
    }

    #[test]
    fn second_run_into_same_output_conflicts() {
        let (_dir, mut document, config) = setup();
        let warnings = CollectedWarnings::default();

        convert_gltf(
            &mut document,
            &config,
            &mut RecordingCompiler::default(),
            &warnings,
        )
        .unwrap();

        let mut fresh =
            FileSystemSceneDocument::from_json(scene(), &document.root().join("scene.gltf"))
                .unwrap();
        let mut rerun = RecordingCompiler::default();
        let error = convert_gltf(&mut fresh, &config, &mut rerun, &warnings).unwrap_err();

        assert_eq!(kind_of(&error), Some(ErrorKind::OutputConflict));
        assert!(rerun.jobs.is_empty());
    }

    #[test]
    fn payloads_skip_nested_output_with_unnormalized_root() {
        let (dir, _, _) = setup();
        let input = dir.path().join("input");
        let output = input.join("out");
        std::fs::create_dir(&output).unwrap();

        let copied = copy_payloads(&input.join("..").join("input"), &output).unwrap();

        assert_eq!(copied, 1);
        assert_eq!(std::fs::read(output.join("mesh.bin")).unwrap(), vec![1u8, 2, 3, 4]);
    }

    #[test]
    fn payloads_are_not_copied_onto_themselves() {
        let (dir, _, _) = setup();
        let input = dir.path().join("input");

        let copied = copy_payloads(&input.join("."), &input).unwrap();

        assert_eq!(copied, 0);
        assert_eq!(std::fs::read(input.join("mesh.bin")).unwrap(), vec![1u8, 2, 3, 4]);
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_root_is_a_configuration_error() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let (dir, _, config) = setup();
        std::fs::create_dir_all(&config.output_dir).unwrap();
        let root = dir.path().join(OsStr::from_bytes(b"in\xffput"));

        let error = copy_payloads(&root, &config.output_dir).unwrap_err();

        assert_eq!(kind_of(&error), Some(ErrorKind::Configuration));
    }
}
