//! Error types for the uvb service.

use std::path::PathBuf;

/// Exit code surfaced for launch errors, missing projects, timeouts and
/// interrupts; distinct from any exit code the build tool itself uses.
pub const FAILURE_SENTINEL: i32 = -1;

/// Fatal conditions that abort the pipeline.
///
/// Non-fatal conditions (an unparsable log, an unresolvable output
/// directory, a per-file copy failure) never appear here; they are
/// reported as warnings and the run still succeeds.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    IO(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] uvb_config::error::Error),

    #[error("Failed to launch build tool: {0}")]
    Launch(std::io::Error),

    #[error("Build timed out after {0} seconds")]
    Timeout(u64),

    #[error("Lost track of the build process while waiting for it")]
    Wait,

    #[error("Build failed with exit code {0}")]
    Build(i32),

    #[error("Project not found: {0:?}")]
    ProjectMissing(PathBuf),

    #[error("No project file found under {0:?}")]
    NoProjectFound(PathBuf),

    #[error("Interrupted")]
    Interrupted,
}

impl Error {
    /// Exit code reported to the invoking shell.
    ///
    /// A failed build keeps the tool's own exit code; every other fatal
    /// condition maps to the sentinel.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Build(code) => *code,
            _ => FAILURE_SENTINEL,
        }
    }
}
