//! Usage output and exit codes for failed invocations

use clap::error::ErrorKind;
use clap::CommandFactory;
use std::process::ExitCode;

use crate::cli::Cli;
use crate::core::RunError;

/// Print the full help text to stderr
pub fn print_help_to_stderr() {
    let mut cmd = Cli::command();
    eprintln!("{}", cmd.render_help());
}

/// Handle a clap parse failure. `-h` and `-V` are not failures and exit 0.
pub fn parse_failure(err: clap::Error) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => report(RunError::from(err)),
    }
}

/// Render an error to stderr and pick the exit code. Usage errors are
/// followed by the full help text.
pub fn report(err: RunError) -> ExitCode {
    let code = err.exit_code();
    let usage = err.is_usage();

    match err {
        RunError::InvalidArguments(e) => {
            let _ = e.print();
        }
        other => eprintln!("{:?}", miette::Report::new(other)),
    }

    if usage {
        eprintln!();
        print_help_to_stderr();
    }

    ExitCode::from(code)
}
