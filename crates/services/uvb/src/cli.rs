//! Command-line interface for uvb.

use clap::Parser;
use std::path::PathBuf;

/// Command-line interface for uvb.
#[derive(Parser, Debug)]
#[command(name = "uvb")]
#[command(about = "uvb - Automated build orchestrator for Keil uVision projects")]
pub struct Cli {
    /// Project file (.uvprojx or .uvproj); auto-detected in the current
    /// directory when omitted
    pub project: Option<PathBuf>,

    /// Build target name
    pub target: Option<String>,

    /// Parallel compilation jobs (0 = all available cores)
    #[arg(short = 'j', value_name = "N")]
    pub jobs: Option<u32>,

    /// Path to the build-tool executable, overriding the config file and
    /// PATH lookup
    #[arg(short = 'u', long)]
    pub toolchain: Option<PathBuf>,

    /// Path to the user configuration file
    #[arg(short, long, default_value = "uvb.toml")]
    pub config: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_attached_jobs_flag() {
        let cli = Cli::parse_from(["uvb", "-j4", "app.uvprojx", "Debug"]);
        assert_eq!(cli.jobs, Some(4));
        assert_eq!(cli.project, Some(PathBuf::from("app.uvprojx")));
        assert_eq!(cli.target.as_deref(), Some("Debug"));
    }

    #[test]
    fn everything_is_optional() {
        let cli = Cli::parse_from(["uvb"]);
        assert_eq!(cli.jobs, None);
        assert_eq!(cli.project, None);
        assert_eq!(cli.target, None);
        assert_eq!(cli.toolchain, None);
        assert_eq!(cli.config, PathBuf::from("uvb.toml"));
    }
}
