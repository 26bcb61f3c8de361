//! Extraction of the output location from the build log.
//!
//! The build tool ends a successful build with a single summary line
//! naming the linked image and the error/warning counts. Scraping it is
//! best-effort: a missing or unparsable line disables artifact
//! collection for the run, it never fails the build.

use std::path::{Path, PathBuf};

use regex::Regex;

/// The tool's summary line. Single source of truth for the format; any
/// change to it upstream is a compatibility break.
const SUMMARY_LINE: &str = r#""([^"]+)"\s*-\s*\d+\s*Error\(s\),\s*\d+\s*Warning\(s\)"#;

/// Extension of the linker image named on the summary line.
const IMAGE_EXTENSION: &str = ".axf";

/// Output location declared by the summary line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputInfo {
    /// Directory part of the quoted image path, as written in the log.
    pub directory: PathBuf,
    /// Image file name with the linker extension stripped.
    pub base_name: String,
}

/// Scan log text for the summary line and extract the output location.
///
/// Only the first match is used; the summary line appears at most once
/// per build target.
pub fn parse_output_info(log_text: &str) -> Option<OutputInfo> {
    let re = Regex::new(SUMMARY_LINE).ok()?;
    let captures = re.captures(log_text)?;
    let quoted = Path::new(captures.get(1)?.as_str());

    let directory = quoted.parent()?.to_path_buf();
    let file_name = quoted.file_name()?.to_string_lossy();
    let base_name = file_name
        .strip_suffix(IMAGE_EXTENSION)
        .unwrap_or(&file_name)
        .to_string();

    Some(OutputInfo {
        directory,
        base_name,
    })
}

/// Resolve the extracted directory against the project file's location.
///
/// An absolute directory is used unchanged; a relative one is interpreted
/// relative to the project file's parent directory (not the working
/// directory) and canonicalised. Any failure yields `None`.
pub fn resolve_output_dir(project: &Path, directory: &Path) -> Option<PathBuf> {
    if directory.is_absolute() {
        return Some(directory.to_path_buf());
    }
    project.parent()?.join(directory).canonicalize().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_absolute_path() {
        let log = "compiling main.c...\n\"C:/out/app.axf\" - 0 Error(s), 0 Warning(s)\n";
        let info = parse_output_info(log).unwrap();
        assert_eq!(info.directory, PathBuf::from("C:/out"));
        assert_eq!(info.base_name, "app");
    }

    #[test]
    fn extracts_relative_path() {
        let log = "\"Objects/app.axf\" - 1 Error(s), 2 Warning(s)";
        let info = parse_output_info(log).unwrap();
        assert_eq!(info.directory, PathBuf::from("Objects"));
        assert_eq!(info.base_name, "app");
    }

    #[test]
    fn keeps_name_without_image_extension() {
        let log = "\"out/firmware.bin\" - 0 Error(s), 0 Warning(s)";
        let info = parse_output_info(log).unwrap();
        assert_eq!(info.base_name, "firmware.bin");
    }

    #[test]
    fn no_summary_line_yields_none() {
        assert_eq!(parse_output_info("compiling main.c...\ndone\n"), None);
        assert_eq!(parse_output_info(""), None);
    }

    #[test]
    fn first_match_wins() {
        let log = concat!(
            "\"first/a.axf\" - 0 Error(s), 0 Warning(s)\n",
            "\"second/b.axf\" - 0 Error(s), 0 Warning(s)\n",
        );
        let info = parse_output_info(log).unwrap();
        assert_eq!(info.directory, PathBuf::from("first"));
        assert_eq!(info.base_name, "a");
    }

    #[test]
    fn absolute_directory_is_used_unchanged() {
        let dir = resolve_output_dir(Path::new("/proj/app.uvprojx"), Path::new("/out")).unwrap();
        assert_eq!(dir, PathBuf::from("/out"));
    }

    #[test]
    fn relative_directory_resolves_against_project_parent() {
        let tmp = tempfile::tempdir().unwrap();
        let objects = tmp.path().join("Objects");
        std::fs::create_dir(&objects).unwrap();
        let project = tmp.path().join("app.uvprojx");

        let dir = resolve_output_dir(&project, Path::new("Objects")).unwrap();
        assert_eq!(dir, objects.canonicalize().unwrap());
    }

    #[test]
    fn unresolvable_directory_yields_none() {
        let tmp = tempfile::tempdir().unwrap();
        let project = tmp.path().join("app.uvprojx");
        assert_eq!(resolve_output_dir(&project, Path::new("missing")), None);
    }
}
