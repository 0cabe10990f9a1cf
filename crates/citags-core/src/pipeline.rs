//! Pipeline orchestration: one forward pass with three early-exit
//! checkpoints.
//!
//! Each stage consumes the prior stage's full output before the next
//! begins. Early exits (nothing changed, nothing relevant changed, nothing
//! covered) are successful outcomes that produce no output file; every
//! failure propagates.

use std::collections::BTreeSet;

use tracing::{debug, info};

use crate::changes;
use crate::config::RunConfig;
use crate::emit;
use crate::error::Result;
use crate::modules;
use crate::roles::{self, CollectOptions};

/// What a run produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The job script was written with these command lines.
    Written { lines: Vec<String> },

    /// No changed paths; nothing to do.
    NoChangedPaths,

    /// Changed paths named no source modules; nothing to do.
    NoChangedModules,

    /// No changed module has integration-test coverage; nothing to do.
    NoMatchingTags,
}

/// Intersect module tags with the tags available in test definitions.
pub fn intersect_tags(
    module_tags: &BTreeSet<String>,
    available: &BTreeSet<String>,
) -> BTreeSet<String> {
    module_tags.intersection(available).cloned().collect()
}

/// Execute the full selection pipeline for `config`.
pub fn run(config: &RunConfig) -> Result<Outcome> {
    let paths = match &config.changes_file {
        Some(path) => changes::changed_paths_from_file(path)?,
        None => changes::changed_paths_from_git(&config.repo_root, &config.diff_ref)?,
    };
    if paths.is_empty() {
        info!("no changed paths; skipping integration tests");
        return Ok(Outcome::NoChangedPaths);
    }
    debug!(count = paths.len(), "changed paths");

    let changed_modules = modules::extract_modules(&paths);
    if changed_modules.is_empty() {
        info!("no source modules changed; skipping integration tests");
        return Ok(Outcome::NoChangedModules);
    }
    debug!(modules = ?changed_modules, "changed modules");

    let module_tags = modules::derive_module_tags(&changed_modules);

    let available = roles::collect_role_tags(
        &config.repo_root,
        config.job.targets(),
        CollectOptions {
            quiet_deprecations: config.quiet_deprecations,
        },
    )?;
    debug!(count = available.len(), "available role tags");

    let use_tags = intersect_tags(&module_tags, &available);
    if use_tags.is_empty() {
        info!("changed modules have no matching integration-test coverage");
        return Ok(Outcome::NoMatchingTags);
    }
    info!(tags = ?use_tags, "selected integration-test tags");

    let lines = emit::write_job_script(&config.output, &config.job, &use_tags)?;
    Ok(Outcome::Written { lines })
}
