//! Module Extractor and Tag Deriver.
//!
//! Maps changed file paths to the source modules they touch and derives
//! the `test_<module>` tags used to select integration-test roles. A path
//! names a module only when it looks like a shipped module file: accepted
//! extension, not at the repository root, not under the test tree, and
//! not a package initializer.

use std::collections::BTreeSet;

/// File extensions accepted as source modules.
pub const MODULE_EXTENSIONS: [&str; 2] = ["py", "ps1"];

/// Paths under this prefix are test code, never source modules.
pub const TEST_DIR_PREFIX: &str = "test/";

/// Package initializer files do not name a module.
pub const INIT_FILE: &str = "__init__.py";

/// Prefix joining a module name to its integration-test tag.
pub const MODULE_TAG_PREFIX: &str = "test_";

/// Derive the module name for a single changed path, if it names one.
pub fn module_name(path: &str) -> Option<String> {
    if !path.contains('/') {
        return None;
    }
    if path.starts_with(TEST_DIR_PREFIX) {
        return None;
    }
    let basename = path.rsplit('/').next()?;
    if basename == INIT_FILE {
        return None;
    }
    let (stem, ext) = basename.rsplit_once('.')?;
    if stem.is_empty() || !MODULE_EXTENSIONS.contains(&ext) {
        return None;
    }
    Some(strip_underscores(stem).to_string())
}

/// Strip leading and trailing underscores from a module stem.
///
/// Interior underscores are preserved. Idempotent.
pub fn strip_underscores(name: &str) -> &str {
    name.trim_matches('_')
}

/// Extract module names from changed paths.
///
/// Duplicates are permitted and input order is preserved; deduplication
/// happens when tags are derived.
pub fn extract_modules(paths: &[String]) -> Vec<String> {
    paths.iter().filter_map(|p| module_name(p)).collect()
}

/// Derive the set of module tags for the extracted module names.
///
/// Distinct module names yield distinct tags; the result is sorted and
/// duplicate-free.
pub fn derive_module_tags(modules: &[String]) -> BTreeSet<String> {
    modules
        .iter()
        .map(|m| format!("{MODULE_TAG_PREFIX}{m}"))
        .collect()
}
