//! Run configuration for a single pipeline invocation.
//!
//! Everything the pipeline consults lives here as an explicit value; there
//! is no ambient process-global configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::CitagsError;
use crate::jobs::JobKind;

/// Module group partition being exercised.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ModuleGroup {
    Core,
    Extras,
}

impl ModuleGroup {
    /// Group name as it appears on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            ModuleGroup::Core => "core",
            ModuleGroup::Extras => "extras",
        }
    }
}

impl std::str::FromStr for ModuleGroup {
    type Err = CitagsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "core" => Ok(ModuleGroup::Core),
            "extras" => Ok(ModuleGroup::Extras),
            other => Err(CitagsError::Configuration(format!(
                "unknown module group: {other}"
            ))),
        }
    }
}

/// Complete configuration for one run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Repository root all paths are relative to.
    pub repo_root: PathBuf,

    /// Module group partition being exercised.
    pub group: ModuleGroup,

    /// Explicit changes file; `None` selects git diff mode.
    pub changes_file: Option<PathBuf>,

    /// Reference branch the working tree is diffed against in git mode.
    pub diff_ref: String,

    /// The CI job to parameterize.
    pub job: JobKind,

    /// Output file path for the generated job script.
    pub output: PathBuf,

    /// Suppress deprecation warnings while traversing test-definition
    /// documents.
    pub quiet_deprecations: bool,
}
