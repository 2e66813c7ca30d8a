//! # External Command Execution
//!
//! Every external tool docupages drives (`git`, the API-reference generator,
//! the static-site generator) is invoked through the [`CommandRunner`] trait.
//! The publish pipeline never touches `std::process` directly, which lets the
//! repository manager and the documentation builder be exercised against a
//! scripted runner in tests.
//!
//! ## Key Components
//!
//! - **`Invocation`**: program, arguments and working directory of one call.
//!   Arguments can be marked secret; the `Display` rendering (used for logs
//!   and error messages) masks them as `***`.
//! - **`CommandStatus`**: the exit status of a finished call.
//! - **`CommandRunner`**: `run` hands the status back to callers that can
//!   recover from a failure, `run_required` turns a non-zero exit into
//!   [`Error::CommandFailed`].
//! - **`SystemRunner`**: the real implementation. Child processes inherit
//!   stderr so the tool's own diagnostics reach the user unchanged.

use std::ffi::{OsStr, OsString};
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus, Stdio};

use log::debug;
use secrecy::{ExposeSecret, SecretString};

use crate::error::{Error, Result};

/// A single command-line argument.
pub enum Arg {
    /// Shown verbatim in logs and errors.
    Plain(OsString),
    /// Passed to the child process but rendered as `***` everywhere else.
    Secret(SecretString),
}

impl Arg {
    fn as_os_str(&self) -> &OsStr {
        match self {
            Arg::Plain(value) => value.as_os_str(),
            Arg::Secret(value) => OsStr::new(value.expose_secret()),
        }
    }
}

impl fmt::Display for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arg::Plain(value) => {
                let text = value.to_string_lossy();
                if text.is_empty() || text.contains(char::is_whitespace) {
                    write!(f, "'{}'", text)
                } else {
                    f.write_str(&text)
                }
            }
            Arg::Secret(_) => f.write_str("***"),
        }
    }
}

impl fmt::Debug for Arg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Arg({})", self)
    }
}

/// Description of one external program call.
#[derive(Debug)]
pub struct Invocation {
    program: String,
    args: Vec<Arg>,
    cwd: PathBuf,
    quiet: bool,
}

impl Invocation {
    /// Creates an invocation of `program` that will run inside `cwd`.
    pub fn new(program: impl Into<String>, cwd: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: cwd.into(),
            quiet: false,
        }
    }

    /// Appends a plain argument.
    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(Arg::Plain(arg.into()));
        self
    }

    /// Appends several plain arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args
            .extend(args.into_iter().map(|arg| Arg::Plain(arg.into())));
        self
    }

    /// Appends an argument that must never appear in logs or errors.
    pub fn secret_arg(mut self, secret: SecretString) -> Self {
        self.args.push(Arg::Secret(secret));
        self
    }

    /// Discards the child's stdout. Stderr is always inherited.
    pub fn quiet(mut self) -> Self {
        self.quiet = true;
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[Arg] {
        &self.args
    }

    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Builds the `std::process::Command` for this invocation, with secrets
    /// exposed.
    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        command
            .args(self.args.iter().map(Arg::as_os_str))
            .current_dir(&self.cwd);
        if self.quiet {
            command.stdout(Stdio::null());
        }
        command
    }
}

impl fmt::Display for Invocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

/// Exit status of a finished external command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    code: Option<i32>,
}

impl CommandStatus {
    /// A status for a process that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self { code: Some(code) }
    }

    pub fn code(&self) -> Option<i32> {
        self.code
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turns a non-zero status into a fatal [`Error::CommandFailed`].
    pub fn check(self, invocation: &Invocation) -> Result<()> {
        if self.success() {
            Ok(())
        } else {
            Err(Error::CommandFailed {
                command: invocation.to_string(),
                status: self.code,
            })
        }
    }
}

impl From<ExitStatus> for CommandStatus {
    fn from(status: ExitStatus) -> Self {
        Self {
            code: status.code(),
        }
    }
}

/// Capability to execute external programs.
///
/// Implementors only provide [`status`](CommandRunner::status); the provided
/// methods add logging and failure handling on top of it.
pub trait CommandRunner: Send + Sync {
    /// Runs the invocation to completion and reports its exit status.
    ///
    /// Returns `Err` only when the program could not be started.
    fn status(&self, invocation: &Invocation) -> Result<CommandStatus>;

    /// Runs the invocation and hands back its status, successful or not.
    fn run(&self, invocation: &Invocation) -> Result<CommandStatus> {
        debug!("Running `{}` in {}", invocation, invocation.cwd().display());
        let status = self.status(invocation)?;
        if !status.success() {
            debug!("`{}` exited with {:?}", invocation, status.code());
        }
        Ok(status)
    }

    /// Runs the invocation; any non-zero exit is fatal.
    fn run_required(&self, invocation: &Invocation) -> Result<()> {
        self.run(invocation)?.check(invocation)
    }
}

/// Runs commands as real child processes.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn status(&self, invocation: &Invocation) -> Result<CommandStatus> {
        let status = invocation
            .to_command()
            .status()
            .map_err(|source| Error::CommandSpawn {
                command: invocation.to_string(),
                source,
            })?;
        Ok(status.into())
    }
}
