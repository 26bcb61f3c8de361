//! Command handler composing the build pipeline and artifact staging.

use tracing::{info, warn};

use crate::prelude::*;
use crate::{
    artifacts::{self, Artifact, CopyOutcome},
    build,
    builder::Builder,
    outcome::{BuildOutcome, BuildStatus},
    output_info,
};

/// Run the build and, when it succeeds, stage its artifacts.
///
/// A non-0/1 exit code aborts here with the tool's own code; everything
/// after that point is best-effort and can only downgrade to warnings.
pub async fn handle_build(builder: &Builder) -> Result<BuildOutcome> {
    let exit_status = build::run_build(builder).await?;
    let code = exit_status.code().unwrap_or(-1);

    let status = BuildStatus::from_exit_code(code);
    match status {
        BuildStatus::Success => info!("Build completed successfully"),
        BuildStatus::SuccessWithWarnings => warn!("Build completed with warnings"),
        BuildStatus::Failed(code) => return Err(Error::Build(code)),
    }

    let artifacts = stage_artifacts(builder);
    Ok(BuildOutcome { status, artifacts })
}

/// Parse the final log, resolve the output directory and copy the images
/// into the working directory.
///
/// Every miss on this path is a warning, never an error: the build
/// itself has already succeeded.
fn stage_artifacts(builder: &Builder) -> Vec<Artifact> {
    let request = &builder.request;

    let log_text = match std::fs::read(&request.log_path) {
        Ok(bytes) => String::from_utf8_lossy(&bytes).into_owned(),
        Err(err) => {
            warn!("Could not read build log {:?}: {err}", request.log_path);
            return Vec::new();
        }
    };

    let Some(info) = output_info::parse_output_info(&log_text) else {
        warn!("No output information found in the build log");
        return Vec::new();
    };

    let resolved = output_info::resolve_output_dir(&request.project, &info.directory);
    let Some(output_dir) = resolved.filter(|dir| dir.is_dir()) else {
        warn!(
            "Output directory {:?} could not be resolved to an existing directory",
            info.directory
        );
        return Vec::new();
    };

    let artifacts =
        artifacts::collect_artifacts(&output_dir, &info.base_name, &builder.current_dir);
    if artifacts.is_empty() {
        warn!("No output files found in {:?}", output_dir);
        return artifacts;
    }

    info!("Output files:");
    for artifact in &artifacts {
        info!("  {} ({} bytes)", artifact.name, artifact.size);
        match &artifact.copy {
            CopyOutcome::Copied => info!("  Copied to {:?}", builder.current_dir),
            CopyOutcome::Failed(reason) => warn!("  Copy failed: {reason}"),
        }
    }
    artifacts
}
