use clap::Parser;
use std::process::ExitCode;

use netx_runtests::cli::{self, usage, Cli};

fn main() -> ExitCode {
    // Reset SIGPIPE to default behavior (terminate silently) for proper Unix piping.
    #[cfg(unix)]
    {
        unsafe {
            libc::signal(libc::SIGPIPE, libc::SIG_DFL);
        }
    }

    if let Err(e) = miette::set_hook(Box::new(|_| {
        Box::new(
            miette::MietteHandlerOpts::new()
                .terminal_links(true)
                .unicode(true)
                .context_lines(2)
                .tab_width(4)
                .build(),
        )
    })) {
        eprintln!("warning: {e}");
    }

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage::parse_failure(e),
    };
    cli.init_tracing();

    match cli::run(cli) {
        Ok(code) => ExitCode::from(code),
        Err(err) => usage::report(err),
    }
}
