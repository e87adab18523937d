//! Find a file in the workspace by name and open it on GitHub.

use ccfind::{Runner, RunnerError};
use ccfind_cli::{init_tracing, parse_args, WorkspaceArgs};
use clap::builder::NonEmptyStringValueParser;
use clap::Parser;
use std::io;
use std::process::ExitCode;
use tracing::error;

/// Open a workspace file on GitHub.
#[derive(Parser, Debug)]
#[command(
    name = "ccgho",
    version,
    long_about = None,
    after_help = "Examples:\n  ccgho -f v3 MapContainer\n  ccgho UserService"
)]
struct Args {
    #[command(flatten)]
    workspace: WorkspaceArgs,

    /// Part of the file name, without extension (case-insensitive).
    #[arg(value_name = "FILENAME", value_parser = NonEmptyStringValueParser::new())]
    filename: String,
}

fn main() -> ExitCode {
    init_tracing();

    let args: Args = match parse_args() {
        Ok(args) => args,
        Err(code) => return code,
    };

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(error = %e, "ccgho failed");
            ExitCode::from(e.exit_code())
        }
    }
}

fn run(args: &Args) -> Result<(), RunnerError> {
    let runner = Runner::new(args.workspace.load_config()?);
    runner.open_file(
        &args.filename,
        args.workspace.folder(),
        io::stdin().lock(),
        io::stdout().lock(),
    )?;
    Ok(())
}
