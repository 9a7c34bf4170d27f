//! CLI argument definitions using clap derive

use clap::Parser;
use clap_complete::Shell;
use tracing_subscriber::filter::LevelFilter;

use crate::core::config::COMMAND_ENV;

#[derive(Parser, Debug)]
#[command(name = "runtests")]
#[command(author, version, about = "Run the NetX API tests against a server")]
#[command(long_about = "Run the NetX API tests against a server.\n\n\
Credentials, server URL and page size are passed to the test module through the \
NETX_USERNAME, NETX_PASSWORD, NETX_URL and ASSETS_PER_PAGE environment variables.")]
#[command(args_override_self = true)]
pub struct Cli {
    /// NetX account name
    #[arg(short = 'u', long, value_name = "USERNAME", allow_hyphen_values = true)]
    pub username: Option<String>,

    /// NetX account password
    #[arg(short = 'p', long, value_name = "PASSWORD", allow_hyphen_values = true)]
    pub password: Option<String>,

    /// Server hostname (http:// is prepended) or full URL
    #[arg(short = 's', long, value_name = "SERVER", allow_hyphen_values = true)]
    pub server: Option<String>,

    /// Assets per page for listing calls [default: 10]
    #[arg(short = 'a', long, value_name = "ASSETS_PER_PAGE", allow_hyphen_values = true)]
    pub assets_per_page: Option<String>,

    /// Test command to run instead of the configured one
    #[arg(long, value_name = "CMD", env = COMMAND_ENV)]
    pub command: Option<String>,

    /// Show what would be exported without running the tests
    #[arg(long, short = 'n')]
    pub dry_run: bool,

    /// Enable verbose output
    #[arg(long, short = 'v')]
    pub verbose: bool,

    /// Print a shell completion script and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    fn tracing_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else {
            LevelFilter::INFO
        }
    }

    /// Log to stderr so stdout stays with the operator echo and the test output
    pub fn init_tracing(&self) {
        tracing_subscriber::fmt()
            .with_max_level(self.tracing_level())
            .with_writer(std::io::stderr)
            .with_target(false)
            .init()
    }
}
