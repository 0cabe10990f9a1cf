//! Script Emitter: serializes job command lines to the output file.

use std::collections::BTreeSet;
use std::path::Path;

use tracing::info;

use crate::error::{CitagsError, Result};
use crate::jobs::JobKind;

/// Path of the CI entry-point script for a script name.
pub fn script_path(script: &str) -> String {
    format!("test/utils/ci/{script}.sh")
}

/// Render one job command line.
///
/// Tags appear comma-joined in sorted order, each exactly once.
pub fn render_command(
    job_spec: &str,
    targets: &[&str],
    tags: &BTreeSet<String>,
    script: &str,
) -> String {
    let target_list = targets.join(" ");
    let tag_list = tags.iter().map(String::as_str).collect::<Vec<_>>().join(",");
    format!(
        "{job_spec} TARGET=\"{target_list}\" TEST_FLAGS=\"-t {tag_list}\" {}",
        script_path(script)
    )
}

/// Write all job command lines for `job` to `output`, one per line with a
/// trailing newline. Overwrites any existing file. Returns the lines that
/// were written.
pub fn write_job_script(
    output: &Path,
    job: &JobKind,
    tags: &BTreeSet<String>,
) -> Result<Vec<String>> {
    let lines: Vec<String> = job
        .job_specs()
        .iter()
        .map(|spec| render_command(spec, job.targets(), tags, job.script_name()))
        .collect();

    let mut content = lines.join("\n");
    content.push('\n');
    std::fs::write(output, content).map_err(|source| CitagsError::Io {
        path: output.to_path_buf(),
        source,
    })?;

    info!(path = %output.display(), jobs = lines.len(), "wrote job script");
    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tags(raw: &[&str]) -> BTreeSet<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn renders_fixed_command_form() {
        let line = render_command(
            "IMAGE=ubuntu1604 PRIVILEGED=true",
            &["non_destructive"],
            &tags(&["test_foo"]),
            "integration",
        );
        assert_eq!(
            line,
            "IMAGE=ubuntu1604 PRIVILEGED=true TARGET=\"non_destructive\" TEST_FLAGS=\"-t test_foo\" test/utils/ci/integration.sh"
        );
    }

    #[test]
    fn joins_targets_with_spaces_and_tags_with_commas() {
        let line = render_command(
            "PLATFORM=freebsd VERSION=11.0",
            &["non_destructive", "destructive"],
            &tags(&["test_foo", "test_bar"]),
            "remote",
        );
        assert!(line.contains("TARGET=\"non_destructive destructive\""));
        // BTreeSet iteration is sorted.
        assert!(line.contains("TEST_FLAGS=\"-t test_bar,test_foo\""));
        assert!(line.ends_with("test/utils/ci/remote.sh"));
    }

    #[test]
    fn writes_lines_with_trailing_newline() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("run_tests.sh");
        let job = JobKind::Integration {
            image: "ubuntu1604".to_string(),
            privileged: false,
        };

        let lines = write_job_script(&output, &job, &tags(&["test_foo"])).unwrap();
        assert_eq!(lines.len(), 1);

        let written = std::fs::read_to_string(&output).unwrap();
        assert_eq!(written, format!("{}\n", lines[0]));
    }

    #[test]
    fn overwrites_existing_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("run_tests.sh");
        std::fs::write(&output, "stale content\n").unwrap();

        let job = JobKind::Remote {
            platform: "windows".to_string(),
            version: "2012".to_string(),
        };
        write_job_script(&output, &job, &tags(&["test_win_ping"])).unwrap();

        let written = std::fs::read_to_string(&output).unwrap();
        assert!(!written.contains("stale content"));
        assert!(written.contains("PLATFORM=windows VERSION=2012"));
        assert!(written.contains("TARGET=\"test_win_group1 test_win_group2 test_win_group3\""));
    }

    #[test]
    fn unwritable_output_path_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("missing-dir").join("run_tests.sh");
        let job = JobKind::Integration {
            image: "ubuntu1604".to_string(),
            privileged: false,
        };

        let result = write_job_script(&output, &job, &tags(&["test_foo"]));
        assert!(matches!(result, Err(CitagsError::Io { .. })));
    }
}
