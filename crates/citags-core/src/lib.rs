//! citags Core Library
//!
//! Selects integration-test tags for changed source modules and emits the
//! CI job script that runs the matching suites. The pipeline is a single
//! forward pass: changed paths -> module names -> module tags -> available
//! role tags -> intersection -> job script.

pub mod changes;
pub mod config;
pub mod emit;
pub mod error;
pub mod jobs;
pub mod modules;
pub mod pipeline;
pub mod roles;
pub mod telemetry;

pub use changes::{changed_paths_from_file, changed_paths_from_git, DEFAULT_DIFF_REF};

pub use config::{ModuleGroup, RunConfig};

pub use emit::{render_command, script_path, write_job_script};

pub use error::{CitagsError, Result};

pub use jobs::{JobKind, DEFAULT_TARGETS, WINDOWS_PLATFORM, WINDOWS_TARGETS};

pub use modules::{
    derive_module_tags, extract_modules, module_name, strip_underscores, INIT_FILE,
    MODULE_EXTENSIONS, MODULE_TAG_PREFIX, TEST_DIR_PREFIX,
};

pub use pipeline::{intersect_tags, Outcome};

pub use roles::{collect_role_tags, target_document_path, CollectOptions, INTEGRATION_TEST_DIR};

pub use telemetry::init_tracing;

/// citags version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
