//! Startup context for one build run.
//!
//! Process-wide state (working directory, toolchain location, user
//! config) is captured once here and threaded explicitly into the
//! pipeline; nothing below this layer reads the environment.

use crate::prelude::*;
use std::{path::PathBuf, time::Duration};

use tracing::info;
use uvb_config::{BuildRequest, UvbUserConfig};

use crate::{cli::Cli, discover, toolchain};

/// Name of the log file the build tool writes into, created in the
/// working directory and left behind for post-mortem inspection.
pub const LOG_FILE_NAME: &str = "uvb_build.log";

/// Wall-clock budget for the whole build when the config does not set one.
const DEFAULT_TIMEOUT_SECS: u64 = 300;

/// Immutable context assembled at startup.
#[derive(Debug)]
pub struct Builder {
    /// Invoking directory; artifacts are staged here.
    pub current_dir: PathBuf,
    /// The request handed to the build tool.
    pub request: BuildRequest,
    /// Wall-clock budget for the child process.
    pub timeout: Duration,
}

impl Builder {
    /// Resolve CLI arguments and the optional user config into a context.
    ///
    /// CLI flags win over config values. A project given on the command
    /// line must exist; with none given, the most-recently-discovered
    /// project file under the working directory is used.
    pub fn create(cli: Cli) -> Result<Self> {
        let current_dir = std::env::current_dir()?;
        let config = UvbUserConfig::load_or_default(&cli.config)?;

        let toolchain = cli
            .toolchain
            .or(config.toolchain)
            .unwrap_or_else(toolchain::locate_toolchain);

        let project = match cli.project {
            Some(path) => {
                let path = if path.is_absolute() {
                    path
                } else {
                    current_dir.join(path)
                };
                if !path.exists() {
                    return Err(Error::ProjectMissing(path));
                }
                path
            }
            None => {
                let project = discover::find_projects(&current_dir)
                    .pop()
                    .ok_or_else(|| Error::NoProjectFound(current_dir.clone()))?;
                info!("Auto-detected project: {:?}", project);
                project
            }
        };

        let jobs = cli.jobs.or(config.jobs).unwrap_or(0);
        let timeout =
            Duration::from_secs(config.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));
        let log_path = current_dir.join(LOG_FILE_NAME);

        info!("Project: {:?}", project);
        info!("Toolchain: {:?}", toolchain);
        if jobs == 0 {
            info!("Parallel jobs: -j0 (all cores)");
        } else {
            info!("Parallel jobs: -j{jobs}");
        }
        if let Some(target) = &cli.target {
            info!("Target: {target}");
        }

        Ok(Self {
            current_dir,
            request: BuildRequest {
                toolchain,
                project,
                target: cli.target,
                jobs,
                log_path,
            },
            timeout,
        })
    }
}
