//! Process execution and log streaming for uvb.
//!
//! Provides utilities for spawning and waiting on the external build tool
//! with timeout handling, and for tailing the log file the tool writes
//! while it runs.
//!
//! # Usage
//!
//! ```rust,no_run
//! use uvb_io::runner::Runner;
//! use std::time::Duration;
//!
//! #[tokio::main]
//! async fn main() {
//!     let runner = Runner::new("UV4.exe", vec!["-j0", "-r", "app.uvprojx"]);
//!     let exit_status = runner.run(Duration::from_secs(300)).await;
//! }
//! ```

pub mod process;
pub mod runner;
pub mod tailer;
