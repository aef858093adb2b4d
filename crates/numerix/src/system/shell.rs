//! Shell passthrough.
//!
//! ## Purpose
//!
//! Forwards a command string verbatim to the platform command interpreter
//! (`sh -c` on Unix, `cmd /C` on Windows) and returns its exit status.
//!
//! ## Safety of use
//!
//! This is a trust-the-caller primitive. The command string is neither
//! validated, escaped nor sandboxed; anything the interpreter accepts will
//! run with the privileges of the host process. Do not expose it to
//! untrusted input.
//!
//! ## Design notes
//!
//! * **Blocking**: The caller waits for the child to exit. There is no
//!   timeout and no cancellation.
//! * **Inherited stdio**: The child writes to the host's stdout/stderr.
//! * **Status, not error**: A non-zero exit, including "command not found"
//!   (127 under `sh`), is returned as a value. Only a failure to start the
//!   interpreter itself is an error.
//! * **Signals**: On Unix a child killed by signal `s` reports `128 + s`, as
//!   POSIX shells do.

// External dependencies
use std::process::{Command, ExitStatus};
use tracing::{debug, warn};

// Internal dependencies
use crate::primitives::errors::NumerixError;

#[cfg(windows)]
const DEFAULT_PROGRAM: &str = "cmd";
#[cfg(windows)]
const DEFAULT_FLAG: &str = "/C";

#[cfg(not(windows))]
const DEFAULT_PROGRAM: &str = "sh";
#[cfg(not(windows))]
const DEFAULT_FLAG: &str = "-c";

/// Status reported when the platform gives neither an exit code nor a signal.
const UNKNOWN_STATUS: i32 = -1;

/// Command interpreter used by [`Shell::exec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    program: String,
    flag: String,
}

impl Default for Shell {
    fn default() -> Self {
        Self::new(DEFAULT_PROGRAM, DEFAULT_FLAG)
    }
}

impl Shell {
    /// Interpreter `program` invoked as `program flag <command>`.
    pub fn new(program: impl Into<String>, flag: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            flag: flag.into(),
        }
    }

    /// Interpreter executable.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Flag telling the interpreter to run the next argument as a command.
    pub fn flag(&self) -> &str {
        &self.flag
    }

    /// Run `command` through the interpreter and wait for it to exit.
    pub fn exec(&self, command: &str) -> Result<i32, NumerixError> {
        if command.contains('\0') {
            return Err(NumerixError::InvalidCommand(
                "command contains an interior NUL byte".to_string(),
            ));
        }

        let mut cmd = Command::new(&self.program);
        cmd.arg(&self.flag);
        append_command(&mut cmd, command);

        debug!(program = %self.program, command, "spawning command interpreter");
        let status = cmd.status().map_err(|e| {
            warn!(program = %self.program, error = %e, "failed to start command interpreter");
            NumerixError::Spawn(e.to_string())
        })?;

        let code = exit_code(status);
        debug!(program = %self.program, code, "command interpreter exited");
        Ok(code)
    }
}

#[cfg(windows)]
fn append_command(cmd: &mut Command, command: &str) {
    // `cmd.exe` parses its own command line; standard argument quoting would alter it.
    use std::os::windows::process::CommandExt;
    cmd.raw_arg(command);
}

#[cfg(not(windows))]
fn append_command(cmd: &mut Command, command: &str) {
    cmd.arg(command);
}

/// Map a process status to a single integer.
fn exit_code(status: ExitStatus) -> i32 {
    if let Some(code) = status.code() {
        return code;
    }

    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }

    UNKNOWN_STATUS
}
