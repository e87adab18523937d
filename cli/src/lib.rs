//! Shared plumbing for the `ccgho` and `ccgrep` binaries.

use ccfind::{ConfigError, WorkspaceConfig, EXIT_FAILURE};
use clap::{CommandFactory, Parser};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Options both tools accept.
#[derive(clap::Args, Debug)]
pub struct WorkspaceArgs {
    /// Restrict the search to the first top-level folder whose name contains this (case-insensitive).
    #[arg(short = 'f', long = "folder", value_name = "FOLDERSUBSTRING")]
    pub folder: Option<String>,

    /// TOML file overriding the workspace root, exclusions and commands.
    #[arg(long, env = "CCFIND_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl WorkspaceArgs {
    /// Resolves the workspace configuration from `HOME` and `--config`.
    pub fn load_config(&self) -> Result<WorkspaceConfig, ConfigError> {
        WorkspaceConfig::from_env(self.config.as_deref())
    }

    /// The `-f` value, if any.
    pub fn folder(&self) -> Option<&str> {
        self.folder.as_deref()
    }
}

/// Parses arguments, printing usage and examples on failure.
///
/// Bad invocations exit with status 1; `--help` and `--version` exit 0.
pub fn parse_args<T: Parser>() -> Result<T, ExitCode> {
    T::try_parse().map_err(|e| {
        let _ = e.print();
        if !e.use_stderr() {
            return ExitCode::SUCCESS;
        }

        if let Some(examples) = usage_examples::<T>() {
            eprintln!("\n{examples}");
        }
        ExitCode::from(EXIT_FAILURE)
    })
}

/// The command's `after_help` text, which holds its usage examples.
fn usage_examples<T: CommandFactory>() -> Option<String> {
    T::command().get_after_help().map(ToString::to_string)
}

/// Maps a child process status onto this process's exit code.
pub fn forward_status(code: i32) -> ExitCode {
    ExitCode::from(status_byte(code))
}

/// Codes outside `0..=255` cannot be reported as-is.
fn status_byte(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(u8::MAX)
}

/// Initializes tracing with environment filter support.
///
/// Sets up the global tracing subscriber with:
/// - Compact log formatting (single-line output) on stderr, so stdout only
///   carries the tool's own output
/// - Log level filtering via `RUST_LOG` env var (defaults to "warn")
pub fn init_tracing() {
    tracing_subscriber::registry()
        // Compact lines without module targets or timestamps; stdout stays
        // reserved for the list, the prompt and the search output
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        // Allow runtime log filtering via RUST_LOG env var (e.g., RUST_LOG=debug)
        // Falls back to "warn" level if RUST_LOG is not set or invalid
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        // Register as the global default subscriber
        .init();
}
