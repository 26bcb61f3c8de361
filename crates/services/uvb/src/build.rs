//! The concurrent build pipeline.
//!
//! One unit of execution waits on the child process (bounded by the
//! timeout) while a second tails the log file and streams it to stdout.
//! Shutdown is a fixed handshake: the process result is observed first,
//! then a grace period lets the tailer take one more polling cycle over
//! bytes flushed around process exit, then the stop flag is set and the
//! tailer joined with a bounded wait. Whatever is still queued in the
//! channel afterwards is drained before the result is interpreted, so no
//! trailing output is lost.

use crate::prelude::*;
use std::{
    io::Write,
    process::ExitStatus,
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::sync::mpsc::unbounded_channel;
use tracing::info;
use uvb_io::{process::ProcessError, runner::Runner, tailer::LogTailer};

use crate::builder::Builder;

/// Delay between observing process exit and stopping the tailer.
pub const GRACE_PERIOD: Duration = Duration::from_secs(1);

/// Upper bound on waiting for the tailer to acknowledge the stop flag.
/// Streaming is best-effort; it must never hold up final reporting.
const TAILER_JOIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Run the build tool once, streaming its log while it runs.
///
/// Returns the tool's exit status; launch failures and timeouts map to
/// their fatal error kinds. The log file is truncated at the start and
/// left on disk afterwards for post-mortem inspection.
pub async fn run_build(builder: &Builder) -> Result<ExitStatus> {
    let request = &builder.request;

    // Fresh log stream for this build; the tool appends from byte zero.
    std::fs::write(&request.log_path, "")?;

    let stop = Arc::new(AtomicBool::new(false));
    let (tx, mut rx) = unbounded_channel();
    let tailer_handle = LogTailer::new(&request.log_path).spawn(tx, Arc::clone(&stop));

    let runner = Runner::new(request.toolchain.display().to_string(), request.to_args());
    info!("Command: {}", runner.get_full_command());

    let run_fut = runner.run(builder.timeout);
    tokio::pin!(run_fut);

    let run_result = loop {
        tokio::select! {
            result = &mut run_fut => break result,
            Some(chunk) = rx.recv() => forward_chunk(&chunk),
        }
    };

    tokio::time::sleep(GRACE_PERIOD).await;
    stop.store(true, Ordering::Relaxed);
    let _ = tokio::time::timeout(TAILER_JOIN_TIMEOUT, tailer_handle).await;
    while let Ok(chunk) = rx.try_recv() {
        forward_chunk(&chunk);
    }

    match run_result {
        Ok(exit_status) => Ok(exit_status),
        Err(ProcessError::SpawnProcessFail(err)) => Err(Error::Launch(err)),
        Err(ProcessError::TimedOut(timeout)) => Err(Error::Timeout(timeout.as_secs())),
        Err(ProcessError::WaitChildFail) => Err(Error::Wait),
    }
}

/// Forward one log chunk to the user as-is.
///
/// The stream is the tool's own output, so it goes to stdout untouched
/// rather than through the diagnostic logger.
fn forward_chunk(chunk: &str) {
    print!("{chunk}");
    let _ = std::io::stdout().flush();
}
