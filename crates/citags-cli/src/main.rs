//! citags - select integration-test tags for changed source modules.
//!
//! Diffs the working tree against a reference branch (or reads an explicit
//! changes file), derives `test_<module>` tags for the changed source
//! modules, intersects them with the tags declared by integration-test
//! roles, and writes the CI job script that runs the matching suites.
//!
//! Exit status is 0 on success, including the three "nothing to do"
//! conditions (no changed paths, no changed modules, no matching tags);
//! any pipeline failure exits non-zero with the error chain on stderr.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, Level};

use citags_core::pipeline::{self, Outcome};
use citags_core::{CitagsError, JobKind, ModuleGroup, RunConfig, DEFAULT_DIFF_REF};

#[derive(Parser)]
#[command(name = "citags")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Select integration-test tags for changed modules", long_about = None)]
struct Cli {
    /// Module group to exercise
    #[arg(value_parser = ["core", "extras"])]
    group: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Emit JSON-formatted log lines
    #[arg(long)]
    json: bool,

    /// Read changed paths from this file instead of running git diff
    #[arg(long)]
    changes: Option<PathBuf>,

    /// Reference branch the working tree is diffed against
    #[arg(long = "ref", default_value = DEFAULT_DIFF_REF)]
    diff_ref: String,

    /// Repository root
    #[arg(long, default_value = ".")]
    repo_root: PathBuf,

    /// Container image for an integration job
    #[arg(long, env = "IMAGE")]
    image: Option<String>,

    /// Run the integration job in privileged mode
    #[arg(long)]
    privileged: bool,

    /// Remote platform name
    #[arg(long, env = "PLATFORM")]
    platform: Option<String>,

    /// Remote platform version
    #[arg(long, env = "VERSION")]
    platform_version: Option<String>,

    /// Output file for the generated job script
    #[arg(short, long)]
    output: PathBuf,
}

/// Apply the job selection rule: an image selects an integration job,
/// platform plus version select a remote job, anything else is a
/// configuration error.
fn select_job(cli: &Cli) -> Result<JobKind, CitagsError> {
    if let Some(image) = &cli.image {
        // The PRIVILEGED env var is consulted only when the flag is absent.
        let privileged = cli.privileged
            || std::env::var("PRIVILEGED").map(|v| v == "true").unwrap_or(false);
        return Ok(JobKind::Integration {
            image: image.clone(),
            privileged,
        });
    }

    if let (Some(platform), Some(version)) = (&cli.platform, &cli.platform_version) {
        return Ok(JobKind::Remote {
            platform: platform.clone(),
            version: version.clone(),
        });
    }

    Err(CitagsError::Configuration(
        "either --image or both --platform and --platform-version are required".to_string(),
    ))
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    citags_core::init_tracing(cli.json, level);

    let group: ModuleGroup = cli.group.parse()?;
    let job = select_job(&cli)?;

    info!(
        group = group.name(),
        job = job.script_name(),
        "starting tag selection"
    );

    let config = RunConfig {
        repo_root: cli.repo_root,
        group,
        changes_file: cli.changes,
        diff_ref: cli.diff_ref,
        job,
        output: cli.output,
        quiet_deprecations: true,
    };

    let outcome = pipeline::run(&config).context("tag selection pipeline failed")?;

    match outcome {
        Outcome::Written { lines } => {
            info!(
                path = %config.output.display(),
                jobs = lines.len(),
                "job script written"
            );
        }
        Outcome::NoChangedPaths | Outcome::NoChangedModules | Outcome::NoMatchingTags => {
            // Already reported by the pipeline; nothing to do is success.
        }
    }

    Ok(())
}
