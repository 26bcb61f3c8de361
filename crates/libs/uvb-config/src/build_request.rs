//! The immutable request describing one build-tool invocation.

use std::path::PathBuf;

/// Everything needed to invoke the build tool once.
///
/// Constructed by the CLI layer and read-only from then on; the argument
/// vector is derived from it, never mutated into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildRequest {
    /// Path to the build-tool executable.
    pub toolchain: PathBuf,
    /// Path to the project file.
    pub project: PathBuf,
    /// Optional build target name.
    pub target: Option<String>,
    /// Parallel compilation jobs; 0 means all available cores.
    pub jobs: u32,
    /// Path of the log file the tool writes its progress to.
    pub log_path: PathBuf,
}

impl BuildRequest {
    /// Build the tool's argument vector.
    ///
    /// Layout: `-j<N> -r <project> [-t <target>] -o <log>`. The `-r` flag
    /// requests a rebuild; `-o` redirects the tool's output into the log
    /// file the tailer follows.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            format!("-j{}", self.jobs),
            String::from("-r"),
            self.project.display().to_string(),
        ];
        if let Some(target) = &self.target {
            args.push(String::from("-t"));
            args.push(target.clone());
        }
        args.push(String::from("-o"));
        args.push(self.log_path.display().to_string());
        args
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(jobs: u32, target: Option<&str>) -> BuildRequest {
        BuildRequest {
            toolchain: PathBuf::from("UV4.exe"),
            project: PathBuf::from("app.uvprojx"),
            target: target.map(String::from),
            jobs,
            log_path: PathBuf::from("uvb_build.log"),
        }
    }

    #[test]
    fn exactly_one_jobs_flag_for_any_level() {
        for jobs in [0, 1, 2, 8, 64] {
            let args = request(jobs, None).to_args();
            let flags: Vec<_> = args.iter().filter(|a| a.starts_with("-j")).collect();
            assert_eq!(flags, vec![&format!("-j{jobs}")]);
        }
    }

    #[test]
    fn args_without_target() {
        let args = request(0, None).to_args();
        assert_eq!(args, ["-j0", "-r", "app.uvprojx", "-o", "uvb_build.log"]);
    }

    #[test]
    fn args_with_target() {
        let args = request(4, Some("Debug")).to_args();
        assert_eq!(
            args,
            ["-j4", "-r", "app.uvprojx", "-t", "Debug", "-o", "uvb_build.log"]
        );
    }
}
