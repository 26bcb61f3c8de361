//! Configuration for uvb builds.
//!
//! Provides the immutable build request handed to the orchestrator and the
//! optional `uvb.toml` user configuration.
//!
//! # Usage
//!
//! ```rust
//! use uvb_config::BuildRequest;
//! use std::path::PathBuf;
//!
//! let request = BuildRequest {
//!     toolchain: PathBuf::from("UV4.exe"),
//!     project: PathBuf::from("app.uvprojx"),
//!     target: None,
//!     jobs: 0,
//!     log_path: PathBuf::from("uvb_build.log"),
//! };
//! let args = request.to_args();
//! ```

pub mod build_request;
pub mod error;
pub mod prelude;
pub mod user_config;

pub use build_request::BuildRequest;
pub use user_config::UvbUserConfig;
