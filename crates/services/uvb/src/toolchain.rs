//! Resolution of the build-tool executable.

use std::{
    env,
    path::{Path, PathBuf},
};

use tracing::debug;

/// Executable name of the uVision command-line build tool.
pub const TOOLCHAIN_EXECUTABLE: &str = "UV4.exe";

/// Install locations probed when the executable is not on PATH.
const KNOWN_LOCATIONS: [&str; 2] = ["C:/Keil_v5/UV4/UV4.exe", "C:/Keil/UV4/UV4.exe"];

/// Locate the build tool: PATH scan first, then known install
/// locations, finally the bare executable name (left to the OS to
/// resolve, and to the launch step to report as missing).
pub fn locate_toolchain() -> PathBuf {
    if let Some(path_var) = env::var_os("PATH") {
        if let Some(found) = search_dirs(env::split_paths(&path_var)) {
            debug!("Toolchain found on PATH: {:?}", found);
            return found;
        }
    }

    for location in KNOWN_LOCATIONS {
        let candidate = Path::new(location);
        if candidate.exists() {
            return candidate.to_path_buf();
        }
    }

    PathBuf::from(TOOLCHAIN_EXECUTABLE)
}

/// Probe each directory for the executable.
fn search_dirs(dirs: impl Iterator<Item = PathBuf>) -> Option<PathBuf> {
    dirs.map(|dir| dir.join(TOOLCHAIN_EXECUTABLE))
        .find(|candidate| candidate.exists())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_executable_in_searched_dirs() {
        let tmp = tempfile::tempdir().unwrap();
        let exe = tmp.path().join(TOOLCHAIN_EXECUTABLE);
        std::fs::write(&exe, "").unwrap();

        let dirs = vec![PathBuf::from("/nonexistent"), tmp.path().to_path_buf()];
        assert_eq!(search_dirs(dirs.into_iter()), Some(exe));
    }

    #[test]
    fn empty_search_finds_nothing() {
        assert_eq!(search_dirs(std::iter::empty()), None);
    }
}
