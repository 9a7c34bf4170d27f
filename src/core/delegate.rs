//! Launching the external test module

use std::process::{Command, ExitStatus};

use crate::core::error::RunError;
use crate::core::run_config::RunConfig;

/// The external command that runs the NetX API tests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delegate {
    program: String,
    args: Vec<String>,
}

impl Delegate {
    /// Split a command line on whitespace into program and arguments
    /// (e.g. "python -m unittest tests.test_netx")
    pub fn parse(command_line: &str) -> Result<Self, RunError> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next().ok_or(RunError::EmptyCommand)?;
        Ok(Self {
            program,
            args: parts.collect(),
        })
    }

    /// Build the child process. The run configuration goes into the child's
    /// environment only; the wrapper's own environment is left untouched.
    pub fn command(&self, run: &RunConfig, default_scheme: &str) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args);
        for (key, value) in run.env_vars(default_scheme) {
            cmd.env(key, value);
        }
        cmd
    }

    /// Run the test module to completion and return the exit code to report
    pub fn run(&self, run: &RunConfig, default_scheme: &str) -> Result<u8, RunError> {
        tracing::info!(program = %self.program, args = ?self.args, "starting test command");

        let mut child = self
            .command(run, default_scheme)
            .spawn()
            .map_err(|source| RunError::Spawn {
                program: self.program.clone(),
                source,
            })?;

        let status = child.wait().map_err(|source| RunError::Wait {
            program: self.program.clone(),
            source,
        })?;

        let code = exit_code(status);
        if code == 0 {
            tracing::info!("test command finished successfully");
        } else {
            tracing::warn!(code, "test command failed");
        }
        Ok(code)
    }
}

/// Map a child's status onto our own exit code. Signals follow the shell
/// convention of 128 + signal number.
pub fn exit_code(status: ExitStatus) -> u8 {
    if let Some(code) = status.code() {
        return u8::try_from(code).unwrap_or(1);
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return u8::try_from(128 + signal).unwrap_or(1);
        }
    }

    1
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn run_config(server: &str) -> RunConfig {
        RunConfig::from_parts(
            Some("alice".into()),
            Some("secret".into()),
            Some(server.into()),
            None,
        )
        .unwrap()
    }

    #[test]
    fn test_parse_splits_program_and_args() {
        let delegate = Delegate::parse("  python -m unittest   tests.test_netx ").unwrap();
        assert_eq!(delegate.program, "python");
        assert_eq!(delegate.args, ["-m", "unittest", "tests.test_netx"]);
    }

    #[test]
    fn test_parse_empty_command() {
        assert!(matches!(Delegate::parse("   "), Err(RunError::EmptyCommand)));
    }

    #[test]
    fn test_command_carries_run_config_env() {
        let delegate = Delegate::parse("python -m unittest").unwrap();
        let cmd = delegate.command(&run_config("netxtest.example.org"), "http");

        assert_eq!(cmd.get_program(), OsStr::new("python"));
        let envs: Vec<_> = cmd
            .get_envs()
            .map(|(k, v)| (k.to_owned(), v.map(|v| v.to_owned())))
            .collect();
        let lookup = |key: &str| {
            envs.iter()
                .find(|(k, _)| k == OsStr::new(key))
                .and_then(|(_, v)| v.clone())
        };
        assert_eq!(lookup("NETX_USERNAME").unwrap(), "alice");
        assert_eq!(lookup("NETX_PASSWORD").unwrap(), "secret");
        assert_eq!(lookup("NETX_URL").unwrap(), "http://netxtest.example.org");
        assert_eq!(lookup("ASSETS_PER_PAGE").unwrap(), "10");
    }

    #[test]
    fn test_command_does_not_touch_own_environment() {
        let delegate = Delegate::parse("true").unwrap();
        let _cmd = delegate.command(&run_config("http://isolated.invalid"), "http");
        assert_ne!(
            std::env::var("NETX_URL").ok().as_deref(),
            Some("http://isolated.invalid")
        );
    }

    #[cfg(unix)]
    #[test]
    fn test_run_propagates_exit_code() {
        let delegate = Delegate::parse("false").unwrap();
        let code = delegate.run(&run_config("netx.local"), "http").unwrap();
        assert_eq!(code, 1);

        let delegate = Delegate::parse("true").unwrap();
        let code = delegate.run(&run_config("netx.local"), "http").unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn test_run_missing_program() {
        let delegate = Delegate::parse("netx-runtests-no-such-program-xyz").unwrap();
        let err = delegate.run(&run_config("netx.local"), "http").unwrap_err();
        assert!(matches!(err, RunError::Spawn { .. }));
        assert_eq!(err.exit_code(), 127);
    }
}
