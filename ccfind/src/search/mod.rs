//! Recursive text search, delegated to `grep`.
//!
//! The query is matched literally. Output goes straight to the caller's
//! terminal with color forced on, and the program's exit status becomes the
//! caller's result: 0 when lines matched, 1 when none did, anything else on
//! error.

mod error;

pub use error::SearchError;

use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

/// External search program and the exclusions passed to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// A grep-compatible executable.
    pub program: String,
    /// Passed as `--exclude-dir=<name>`.
    pub exclude_dirs: Vec<String>,
    /// Passed as `--exclude=<glob>`.
    pub exclude_files: Vec<String>,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            program: "grep".to_string(),
            exclude_dirs: ["node_modules", "dist", ".git", "coverage"]
                .map(String::from)
                .to_vec(),
            exclude_files: vec!["*.tsbuildinfo".to_string()],
        }
    }
}

/// Builds the search invocation.
///
/// Format: `grep -r --color=always [--exclude-dir=D]... [--exclude=G]... -F -e <query> <root>`
///
/// The query follows `-e` so a leading `-` is never read as a flag.
#[must_use]
pub fn search_command(config: &SearchConfig, root: &Path, query: &str) -> Command {
    let mut command = Command::new(&config.program);
    command.arg("-r").arg("--color=always");
    for dir in &config.exclude_dirs {
        command.arg(format!("--exclude-dir={dir}"));
    }
    for glob in &config.exclude_files {
        command.arg(format!("--exclude={glob}"));
    }
    command.arg("-F").arg("-e").arg(query).arg(root);
    command
}

/// Runs the search under `root` and returns the program's exit code.
///
/// Blocks until the program exits. There is no timeout.
///
/// # Errors
///
/// Returns [`SearchError::Spawn`] if the program cannot be started.
pub fn run_search(config: &SearchConfig, root: &Path, query: &str) -> Result<i32, SearchError> {
    info!(root = %root.display(), query, "Searching");

    let mut command = search_command(config, root, query);
    debug!(command = ?command, "Running search program");

    let status = command.status().map_err(|e| SearchError::Spawn {
        program: config.program.clone(),
        source: e,
    })?;

    let code = exit_code(status);
    debug!(code, "Search finished");
    Ok(code)
}

/// Decodes a wait status into a plain exit code.
///
/// A program killed by a signal reports `128 + signal`, as shells do.
pub fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    2
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn command_carries_fixed_exclusions() {
        let command = search_command(&SearchConfig::default(), Path::new("/ws/cc.v3"), "TODO");

        assert_eq!(command.get_program(), "grep");
        let args: Vec<_> = command.get_args().collect();
        assert_eq!(
            args,
            vec![
                "-r",
                "--color=always",
                "--exclude-dir=node_modules",
                "--exclude-dir=dist",
                "--exclude-dir=.git",
                "--exclude-dir=coverage",
                "--exclude=*.tsbuildinfo",
                "-F",
                "-e",
                "TODO",
                "/ws/cc.v3",
            ]
        );
    }

    #[test]
    fn query_starting_with_dash_stays_a_pattern() {
        let command = search_command(&SearchConfig::default(), Path::new("/ws"), "--help");
        let args: Vec<_> = command.get_args().collect();

        let position = args.iter().position(|arg| *arg == "--help").unwrap();
        assert_eq!(args[position - 1], "-e");
    }

    #[cfg(unix)]
    #[test]
    fn decodes_wait_status() {
        use std::os::unix::process::ExitStatusExt;

        assert_eq!(exit_code(ExitStatus::from_raw(0)), 0);
        assert_eq!(exit_code(ExitStatus::from_raw(1 << 8)), 1);
        assert_eq!(exit_code(ExitStatus::from_raw(2 << 8)), 2);
        // SIGKILL
        assert_eq!(exit_code(ExitStatus::from_raw(9)), 137);
    }

    #[test]
    fn missing_program_is_a_spawn_error() {
        let config = SearchConfig {
            program: "/nonexistent/ccfind-grep".to_string(),
            ..SearchConfig::default()
        };
        let result = run_search(&config, Path::new("."), "x");
        assert!(matches!(result, Err(SearchError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn forwards_grep_status() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("notes.txt"), "fix this\n// TODO: later\n").unwrap();
        fs::create_dir(temp.path().join("node_modules")).unwrap();
        fs::write(temp.path().join("node_modules/dep.js"), "NEEDLE\n").unwrap();

        let config = SearchConfig::default();
        assert_eq!(run_search(&config, temp.path(), "TODO").unwrap(), 0);
        assert_eq!(run_search(&config, temp.path(), "NEEDLE").unwrap(), 1);
        assert_eq!(run_search(&config, temp.path(), "absent").unwrap(), 1);
    }
}
