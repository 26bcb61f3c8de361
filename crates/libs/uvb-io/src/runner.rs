//! High-level runner for a single build-tool invocation.

use std::{process::ExitStatus, time::Duration};

use tracing::{debug, info};

use crate::process::{ProcessError, spawn_process, wait_child_with_deadline};

/// Runs the external build tool once and waits for it to finish.
///
/// The tool writes its progress to a log file of its own, so the runner
/// does not capture any output streams; observing the log is the tailer's
/// job (see [`crate::tailer`]).
pub struct Runner {
    /// Command to execute.
    command: String,
    /// Command line arguments.
    args: Vec<String>,
}

impl Runner {
    /// Create a new runner with command and arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uvb_io::runner::Runner;
    ///
    /// let runner = Runner::new("UV4.exe", vec!["-j0", "-r", "app.uvprojx"]);
    /// ```
    pub fn new(command: impl Into<String>, args: Vec<impl Into<String>>) -> Self {
        Self {
            command: command.into(),
            args: args.into_iter().map(|a| a.into()).collect(),
        }
    }

    /// Get the full command string with arguments.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use uvb_io::runner::Runner;
    ///
    /// let runner = Runner::new("ls", vec!["-la"]);
    /// assert_eq!(runner.get_full_command(), "ls -la");
    /// ```
    pub fn get_full_command(&self) -> String {
        format!("{} {}", &self.command, &self.args.join(" "))
    }

    /// Run the process and wait for completion, bounded by `timeout`.
    ///
    /// Returns the child's exit status, or a [`ProcessError`] if the
    /// process could not be spawned or exceeded the timeout (in which
    /// case it has been killed).
    pub async fn run(&self, timeout: Duration) -> Result<ExitStatus, ProcessError> {
        let mut child = spawn_process(&self.command, self.args.clone())
            .map_err(ProcessError::SpawnProcessFail)?;
        info!("Process created: {}", self.get_full_command());

        let exit_status = wait_child_with_deadline(&mut child, timeout).await?;
        debug!("Process ended with {}", exit_status);
        Ok(exit_status)
    }
}
