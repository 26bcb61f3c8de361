//! Automated build orchestrator for Keil uVision projects.
//!
//! Wraps one invocation of the uVision command-line build tool: launches
//! it as a child process, streams its log file to the terminal while the
//! build runs, enforces a wall-clock timeout, and on success parses the
//! log's summary line to find and copy the produced binary images into
//! the invoking directory.

pub mod artifacts;
pub mod build;
pub mod builder;
pub mod cli;
pub mod commands;
pub mod discover;
pub mod error;
pub mod outcome;
pub mod output_info;
pub mod prelude;
pub mod toolchain;
