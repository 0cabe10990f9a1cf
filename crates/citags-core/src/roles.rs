//! Role-Tag Collector: tags declared by the roles of test-definition
//! documents.
//!
//! Each target maps to one YAML document at `test/integration/<target>.yml`.
//! Only the subset of the format needed here is interpreted: a document is
//! a sequence of plays, a play may list roles, and a role may carry tags.
//! Everything else in the documents is ignored.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use serde_yaml::Value;
use tracing::warn;

use crate::error::{CitagsError, Result};

/// Directory containing one test-definition document per target.
pub const INTEGRATION_TEST_DIR: &str = "test/integration";

/// Options for document traversal.
///
/// Deprecation warnings are controlled here as an explicit value rather
/// than through process-global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Suppress warnings about deprecated document constructs.
    pub quiet_deprecations: bool,
}

/// Resolve the test-definition document path for a target.
pub fn target_document_path(repo_root: &Path, target: &str) -> PathBuf {
    repo_root
        .join(INTEGRATION_TEST_DIR)
        .join(format!("{target}.yml"))
}

/// Collect every tag attached to a role across all target documents.
///
/// Fails on the first missing or malformed document; there is no
/// partial-failure recovery.
pub fn collect_role_tags(
    repo_root: &Path,
    targets: &[&str],
    options: CollectOptions,
) -> Result<BTreeSet<String>> {
    let mut tags = BTreeSet::new();
    for target in targets {
        let path = target_document_path(repo_root, target);
        let content = std::fs::read_to_string(&path).map_err(|source| CitagsError::Io {
            path: path.clone(),
            source,
        })?;
        let doc: Value = serde_yaml::from_str(&content).map_err(|e| CitagsError::Parse {
            path: path.clone(),
            message: e.to_string(),
        })?;
        collect_document_tags(&doc, &path, options, &mut tags)?;
    }
    Ok(tags)
}

fn collect_document_tags(
    doc: &Value,
    path: &Path,
    options: CollectOptions,
    tags: &mut BTreeSet<String>,
) -> Result<()> {
    let plays = doc.as_sequence().ok_or_else(|| CitagsError::Parse {
        path: path.to_path_buf(),
        message: "document root is not a sequence of plays".to_string(),
    })?;

    for play in plays {
        let Some(roles) = play.get("roles").and_then(Value::as_sequence) else {
            continue;
        };
        for role in roles {
            collect_role_entry_tags(role, options, tags);
        }
    }
    Ok(())
}

/// Collect the tags of a single role entry.
///
/// A bare scalar role (`- setup`) declares no tags. Tags may be a sequence
/// of scalars or a single scalar; a comma-separated scalar is a deprecated
/// legacy form that is still honored.
fn collect_role_entry_tags(role: &Value, options: CollectOptions, tags: &mut BTreeSet<String>) {
    let Some(tag_value) = role.get("tags") else {
        return;
    };
    match tag_value {
        Value::Sequence(seq) => {
            for tag in seq {
                if let Some(s) = tag.as_str() {
                    tags.insert(s.to_string());
                }
            }
        }
        Value::String(s) => {
            if s.contains(',') && !options.quiet_deprecations {
                warn!(tags = %s, "comma-separated tag strings are deprecated; use a list");
            }
            for tag in s.split(',') {
                let tag = tag.trim();
                if !tag.is_empty() {
                    tags.insert(tag.to_string());
                }
            }
        }
        _ => {}
    }
}
