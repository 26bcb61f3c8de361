//! Project-file discovery in the working directory tree.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// Project file extensions, newest format first.
const PROJECT_EXTENSIONS: [&str; 2] = ["uvprojx", "uvproj"];

/// Recursively collect every project file under `root`.
///
/// Callers wanting auto-detection take the last entry, i.e. the
/// most-recently-discovered match.
pub fn find_projects(root: &Path) -> Vec<PathBuf> {
    WalkDir::new(root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.file_type().is_file())
        .map(|entry| entry.into_path())
        .filter(|path| {
            path.extension()
                .and_then(|ext| ext.to_str())
                .is_some_and(|ext| PROJECT_EXTENSIONS.contains(&ext))
        })
        .collect()
}
