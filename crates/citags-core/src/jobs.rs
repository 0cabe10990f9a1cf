//! CI job parameterization: job kinds, parameter strings, target lists.

use serde::{Deserialize, Serialize};

/// Default integration-test targets for POSIX jobs.
pub const DEFAULT_TARGETS: [&str; 2] = ["non_destructive", "destructive"];

/// Targets exercised when the remote platform is Windows.
pub const WINDOWS_TARGETS: [&str; 3] = ["test_win_group1", "test_win_group2", "test_win_group3"];

/// Platform name that selects the Windows target list.
pub const WINDOWS_PLATFORM: &str = "windows";

/// One parameterized invocation of a CI entry-point script.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum JobKind {
    /// Container-image job.
    Integration { image: String, privileged: bool },

    /// Remote-platform job.
    Remote { platform: String, version: String },
}

impl JobKind {
    /// Name of the CI entry-point script this job invokes.
    pub fn script_name(&self) -> &'static str {
        match self {
            JobKind::Integration { .. } => "integration",
            JobKind::Remote { .. } => "remote",
        }
    }

    /// Integration-test targets for this job.
    ///
    /// Remote Windows jobs run the Windows target groups; everything else
    /// runs the default POSIX targets.
    pub fn targets(&self) -> &'static [&'static str] {
        match self {
            JobKind::Remote { platform, .. } if platform == WINDOWS_PLATFORM => &WINDOWS_TARGETS,
            _ => &DEFAULT_TARGETS,
        }
    }

    /// Environment-assignment string identifying this job.
    pub fn env_spec(&self) -> String {
        match self {
            JobKind::Integration { image, privileged } => {
                if *privileged {
                    format!("IMAGE={image} PRIVILEGED=true")
                } else {
                    format!("IMAGE={image}")
                }
            }
            JobKind::Remote { platform, version } => {
                format!("PLATFORM={platform} VERSION={version}")
            }
        }
    }

    /// Job parameter strings, one per CI job permutation.
    ///
    /// Currently always exactly one entry; the emitter accepts any number.
    pub fn job_specs(&self) -> Vec<String> {
        vec![self.env_spec()]
    }
}
