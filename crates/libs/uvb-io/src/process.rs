//! Low-level async process management utilities.

use std::{
    ffi::OsStr,
    io,
    process::{ExitStatus, Stdio},
    time::Duration,
};

use tokio::{
    process::{Child, Command},
    time::Instant,
};

/// Interval between non-blocking status polls of a running child.
const STATUS_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Errors that can occur during process operations.
#[derive(Debug)]
pub enum ProcessError {
    /// Failed to wait for child process.
    WaitChildFail,
    /// Failed to spawn the process.
    SpawnProcessFail(io::Error),
    /// Process exceeded its wall-clock budget and was killed.
    TimedOut(Duration),
}

/// Current status of a running process.
pub enum ProcessStatus {
    /// Process has completed with exit status.
    Done(ExitStatus),
    /// Process is still running.
    Running,
}

/// Spawn a new async process with detached standard streams.
///
/// The build tool reports progress into its own log file rather than on
/// stdout/stderr, so both streams are redirected to null instead of being
/// piped or inherited. The child is killed when its handle is dropped, so
/// it cannot outlive an interrupted caller.
///
/// # Examples
///
/// ```rust
/// use uvb_io::process::spawn_process;
///
/// #[tokio::main]
/// async fn main() {
///     let child = spawn_process("echo", vec!["hello".to_string()]).unwrap();
///     assert!(child.id().is_some());
/// }
/// ```
pub fn spawn_process(cmd: impl AsRef<OsStr>, args: Vec<String>) -> Result<Child, io::Error> {
    Command::new(cmd)
        .args(args)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .kill_on_drop(true)
        .spawn()
}

/// Check process status without blocking.
///
/// # Returns
///
/// Returns a `Result<ProcessStatus, ProcessError>` indicating the current
/// process state.
pub fn get_process_status(child: &mut Child) -> Result<ProcessStatus, ProcessError> {
    match child.try_wait() {
        Ok(Some(exit_status)) => Ok(ProcessStatus::Done(exit_status)),
        Ok(None) => Ok(ProcessStatus::Running),
        Err(_) => Err(ProcessError::WaitChildFail),
    }
}

/// Terminate a child process.
pub async fn stop_child(child: &mut Child) -> Result<(), io::Error> {
    child.kill().await
}

/// Wait for a child process to complete, bounded by a wall-clock deadline.
///
/// Polls the child's status every 100ms. If the deadline passes before the
/// child exits, the child is killed and `ProcessError::TimedOut` is
/// returned; the child never outlives the caller.
///
/// # Examples
///
/// ```rust
/// use std::time::Duration;
/// use uvb_io::process::{spawn_process, wait_child_with_deadline};
///
/// #[tokio::main]
/// async fn main() {
///     let mut child = spawn_process("sleep", vec!["0.1".to_string()]).unwrap();
///     let exit_status = wait_child_with_deadline(&mut child, Duration::from_secs(5))
///         .await
///         .unwrap();
///     assert!(exit_status.success());
/// }
/// ```
pub async fn wait_child_with_deadline(
    child: &mut Child,
    timeout: Duration,
) -> Result<ExitStatus, ProcessError> {
    let deadline = Instant::now() + timeout;
    loop {
        match get_process_status(child)? {
            ProcessStatus::Done(exit_status) => return Ok(exit_status),
            ProcessStatus::Running => {
                if Instant::now() >= deadline {
                    let _ = stop_child(child).await;
                    return Err(ProcessError::TimedOut(timeout));
                }
                tokio::time::sleep(STATUS_POLL_INTERVAL).await;
            }
        }
    }
}
