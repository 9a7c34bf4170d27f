//! Error types for a test run

use miette::Diagnostic;
use thiserror::Error;

/// Exit status for usage errors and other failures of the wrapper itself
pub const EXIT_USAGE: u8 = 1;

/// Exit status when the delegated command cannot be started
pub const EXIT_NOT_STARTED: u8 = 127;

/// Everything that can stop a run before the delegated command reports back
#[derive(Debug, Error, Diagnostic)]
pub enum RunError {
    #[error("missing required arguments: {}", .missing.join(", "))]
    #[diagnostic(
        code(netx::usage::missing),
        help("username, password and server must all be given and non-empty")
    )]
    MissingArguments { missing: Vec<&'static str> },

    #[error("{0}")]
    #[diagnostic(code(netx::usage::invalid))]
    InvalidArguments(#[from] clap::Error),

    #[error("the delegated test command is empty")]
    #[diagnostic(
        code(netx::config::empty_command),
        help("set `command` in config.yaml, NETX_RUNTESTS_COMMAND or --command")
    )]
    EmptyCommand,

    #[error("failed to start `{program}`")]
    #[diagnostic(
        code(netx::delegate::spawn),
        help("check that the test command is installed and on PATH")
    )]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed waiting for `{program}`")]
    #[diagnostic(code(netx::delegate::wait))]
    Wait {
        program: String,
        #[source]
        source: std::io::Error,
    },
}

impl RunError {
    /// True for errors caused by how the wrapper was invoked
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            RunError::MissingArguments { .. } | RunError::InvalidArguments(_)
        )
    }

    /// Process exit status to report for this error
    pub fn exit_code(&self) -> u8 {
        match self {
            RunError::Spawn { .. } => EXIT_NOT_STARTED,
            _ => EXIT_USAGE,
        }
    }
}
