//! Grep across the workspace, or one repository of it.

use ccfind::{Runner, RunnerError};
use ccfind_cli::{forward_status, init_tracing, parse_args, WorkspaceArgs};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::process::ExitCode;
use tracing::error;

/// Search workspace files for a string. Exits 0 when something matched, 1 when nothing did.
#[derive(Parser, Debug)]
#[command(
    name = "ccgrep",
    version,
    long_about = None,
    after_help = "Examples:\n  ccgrep -f v3 TODO\n  ccgrep useMapStore"
)]
struct Args {
    #[command(flatten)]
    workspace: WorkspaceArgs,

    /// Text to search for, matched literally.
    #[arg(value_name = "SEARCHSTRING", value_parser = NonEmptyStringValueParser::new())]
    query: String,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    match run(&args) {
        Ok(code) => forward_status(code),
        Err(e) => {
            error!(error = %e, "ccgrep failed");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<i32, RunnerError> {
    let runner = Runner::new(args.workspace.load_config()?);
    runner.search_text(&args.query, args.workspace.folder())
}
