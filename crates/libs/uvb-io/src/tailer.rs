//! Polling tail over the build tool's log file.
//!
//! The build tool appends to its log file in bursts while it runs. The
//! tailer polls the file on a fixed interval and forwards every newly
//! appended byte to an mpsc sink as soon as it appears. Polling (rather
//! than filesystem notification) keeps the behavior identical across
//! filesystem backends.

use std::{
    io::{self, SeekFrom},
    path::{Path, PathBuf},
    sync::{
        Arc,
        atomic::{AtomicBool, Ordering},
    },
    time::Duration,
};

use tokio::{
    fs::File,
    io::{AsyncReadExt, AsyncSeekExt},
    sync::mpsc::UnboundedSender,
    task::JoinHandle,
};
use tracing::debug;

/// Interval between polls of the log file.
///
/// The file is written in bursts, not continuously; 200ms keeps the
/// stream near real time without busy-reading the file.
pub const POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Tails a growing log file, forwarding appended bytes to a channel.
///
/// The tailer tolerates the file not existing yet (builds may take a
/// moment to create it) and transient read errors; both count as "no new
/// data this tick". It stops within one polling interval of the stop flag
/// being set, performing one final read on the way out.
pub struct LogTailer {
    /// Path of the log file to follow.
    path: PathBuf,
}

impl LogTailer {
    /// Create a tailer for the given log file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Spawn the tailer as a background task.
    ///
    /// # Arguments
    ///
    /// * `tx` - Sink for newly appended log chunks
    /// * `stop` - Flag the owner sets to end tailing
    ///
    /// # Returns
    ///
    /// Returns a `JoinHandle` resolving to the total number of bytes
    /// forwarded.
    pub fn spawn(self, tx: UnboundedSender<String>, stop: Arc<AtomicBool>) -> JoinHandle<u64> {
        tokio::spawn(self.run(tx, stop))
    }

    /// Poll the file until the stop flag is observed.
    ///
    /// The flag is sampled before each read, so a read always follows the
    /// last observation; bytes flushed by the writer before the flag was
    /// set are still forwarded.
    pub async fn run(self, tx: UnboundedSender<String>, stop: Arc<AtomicBool>) -> u64 {
        let mut position: u64 = 0;
        let mut forwarded: u64 = 0;

        loop {
            let stopping = stop.load(Ordering::Relaxed);

            match read_appended(&self.path, position).await {
                Ok(Some((chunk, bytes))) => {
                    position += bytes;
                    forwarded += bytes;
                    if tx.send(chunk).is_err() {
                        // Receiver is gone; nothing left to forward to.
                        break;
                    }
                }
                Ok(None) => {}
                Err(err) => {
                    debug!("Log read failed, retrying next tick: {err}");
                }
            }

            if stopping {
                break;
            }
            tokio::time::sleep(POLL_INTERVAL).await;
        }

        forwarded
    }
}

/// Read all bytes appended past `position`.
///
/// Returns the decoded chunk and its raw byte count, or `None` when the
/// file is missing or has nothing new.
async fn read_appended(path: &Path, position: u64) -> io::Result<Option<(String, u64)>> {
    if !path.exists() {
        return Ok(None);
    }

    let mut file = File::open(path).await?;
    let len = file.metadata().await?.len();
    if len <= position {
        return Ok(None);
    }

    file.seek(SeekFrom::Start(position)).await?;
    let mut buffer = Vec::with_capacity((len - position) as usize);
    file.read_to_end(&mut buffer).await?;
    if buffer.is_empty() {
        return Ok(None);
    }

    let bytes = buffer.len() as u64;
    Ok(Some((String::from_utf8_lossy(&buffer).into_owned(), bytes)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tokio::sync::mpsc::unbounded_channel;

    fn append(path: &Path, text: &str) {
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .unwrap();
        file.write_all(text.as_bytes()).unwrap();
    }

    async fn collect(mut rx: tokio::sync::mpsc::UnboundedReceiver<String>) -> String {
        let mut out = String::new();
        while let Some(chunk) = rx.recv().await {
            out.push_str(&chunk);
        }
        out
    }

    #[tokio::test]
    async fn forwards_two_bursts_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("build.log");

        let (tx, rx) = unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = LogTailer::new(&log).spawn(tx, Arc::clone(&stop));

        append(&log, "first burst\n");
        tokio::time::sleep(POLL_INTERVAL * 3).await;
        append(&log, "second burst\n");
        tokio::time::sleep(POLL_INTERVAL * 3).await;

        stop.store(true, Ordering::Relaxed);
        let forwarded = handle.await.unwrap();

        assert_eq!(collect(rx).await, "first burst\nsecond burst\n");
        assert_eq!(forwarded, "first burst\nsecond burst\n".len() as u64);
    }

    #[tokio::test]
    async fn tolerates_file_created_late() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("build.log");

        let (tx, rx) = unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = LogTailer::new(&log).spawn(tx, Arc::clone(&stop));

        // Nothing exists yet; the tailer must keep polling quietly.
        tokio::time::sleep(POLL_INTERVAL * 2).await;
        append(&log, "late start\n");
        tokio::time::sleep(POLL_INTERVAL * 3).await;

        stop.store(true, Ordering::Relaxed);
        handle.await.unwrap();

        assert_eq!(collect(rx).await, "late start\n");
    }

    #[tokio::test]
    async fn final_read_catches_bytes_written_before_stop() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("build.log");

        let (tx, rx) = unbounded_channel();
        let stop = Arc::new(AtomicBool::new(false));
        let handle = LogTailer::new(&log).spawn(tx, Arc::clone(&stop));

        tokio::time::sleep(POLL_INTERVAL).await;
        append(&log, "last words\n");
        stop.store(true, Ordering::Relaxed);
        handle.await.unwrap();

        assert_eq!(collect(rx).await, "last words\n");
    }

    #[tokio::test]
    async fn missing_file_forwards_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let log = dir.path().join("never-created.log");

        let (tx, rx) = unbounded_channel();
        let stop = Arc::new(AtomicBool::new(true));
        let forwarded = LogTailer::new(&log).spawn(tx, stop).await.unwrap();

        assert_eq!(forwarded, 0);
        assert_eq!(collect(rx).await, "");
    }
}
