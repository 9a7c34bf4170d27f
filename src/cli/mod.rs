//! CLI module - argument parsing and run orchestration

pub mod args;
pub mod usage;

pub use args::Cli;

use clap::CommandFactory;
use clap_complete::generate;
use console::style;
use std::io;

use crate::core::{Config, Delegate, RunConfig, RunError};

/// Validate the invocation, echo the resolved values and hand off to the test
/// command. Returns the exit code to report.
pub fn run(cli: Cli) -> Result<u8, RunError> {
    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "runtests", &mut io::stdout());
        return Ok(0);
    }

    let run = RunConfig::from_parts(cli.username, cli.password, cli.server, cli.assets_per_page)?;

    let mut config = Config::load();
    if cli.command.is_some() {
        config.command = cli.command;
    }
    let delegate = Delegate::parse(config.command())?;
    let scheme = config.default_scheme();

    tracing::debug!(server = %run.server, scheme, "resolved server");
    print_run_config(&run, scheme);

    if cli.dry_run {
        println!(
            "{} Dry run, not starting {}",
            style("!").yellow(),
            style(config.command()).cyan()
        );
        return Ok(0);
    }

    delegate.run(&run, scheme)
}

fn print_run_config(run: &RunConfig, scheme: &str) {
    println!("{} NetX test run", style("→").cyan());
    for (key, value) in run.env_vars(scheme) {
        println!("  {:<16} {}", style(key).dim(), value);
    }
}
