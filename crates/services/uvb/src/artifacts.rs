//! Discovery and staging of built binary images.

use std::{fs, path::Path};

/// Image extensions the build tool produces next to the linker output.
pub const ARTIFACT_EXTENSIONS: [&str; 2] = [".hex", ".bin"];

/// Whether an artifact made it into the working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// Copy succeeded.
    Copied,
    /// Copy failed; the remaining artifacts are still processed.
    Failed(String),
}

/// One discovered output file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    /// File name of the image.
    pub name: String,
    /// Size of the original file in bytes.
    pub size: u64,
    /// Result of copying it into the working directory.
    pub copy: CopyOutcome,
}

/// Find `<base><ext>` candidates in the output directory and copy each
/// into `dest_dir`.
///
/// The originals are only read, never mutated. A failed copy is recorded
/// on its artifact and does not abort the rest; an empty result means no
/// candidates existed (the caller reports that as a warning).
pub fn collect_artifacts(output_dir: &Path, base_name: &str, dest_dir: &Path) -> Vec<Artifact> {
    let mut artifacts = Vec::new();

    for ext in ARTIFACT_EXTENSIONS {
        let name = format!("{base_name}{ext}");
        let source = output_dir.join(&name);
        let Ok(metadata) = source.metadata() else {
            continue;
        };
        if !metadata.is_file() {
            continue;
        }

        let copy = match fs::copy(&source, dest_dir.join(&name)) {
            Ok(_) => CopyOutcome::Copied,
            Err(err) => CopyOutcome::Failed(err.to_string()),
        };
        artifacts.push(Artifact {
            name,
            size: metadata.len(),
            copy,
        });
    }

    artifacts
}
