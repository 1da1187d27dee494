//! Invocation of the external GSettings schema compiler.

use crate::env::HookEnv;
use crate::error::HookError;
use crate::DEFAULT_COMPILER;
use std::ffi::OsString;
use std::io;
use std::path::Path;
use std::process::{Command, ExitStatus};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaCompiler {
    program: OsString,
}

impl SchemaCompiler {
    pub fn new(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Uses `GLIB_COMPILE_SCHEMAS` when set, otherwise `glib-compile-schemas`
    /// from `PATH`.
    pub fn from_env(env: &HookEnv) -> Self {
        match &env.compiler_override {
            Some(program) => Self::new(program.clone()),
            None => Self::new(DEFAULT_COMPILER),
        }
    }

    pub fn program(&self) -> &OsString {
        &self.program
    }

    /// Runs `<program> <dir>` with inherited stdio and waits for it.
    pub fn compile(&self, dir: &Path) -> Result<(), HookError> {
        let status = Command::new(&self.program)
            .arg(dir)
            .status()
            .map_err(|err| self.spawn_error(err))?;

        if status.success() {
            return Ok(());
        }

        Err(HookError::ExternalToolFailure {
            program: self.display_name(),
            dir: dir.to_path_buf(),
            code: status.code(),
            signal: termination_signal(&status),
        })
    }

    fn spawn_error(&self, err: io::Error) -> HookError {
        if err.kind() == io::ErrorKind::NotFound {
            HookError::ExternalToolNotFound {
                program: self.display_name(),
            }
        } else {
            HookError::Spawn {
                program: self.display_name(),
                source: err,
            }
        }
    }

    fn display_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

#[cfg(unix)]
fn termination_signal(status: &ExitStatus) -> Option<i32> {
    use std::os::unix::process::ExitStatusExt;
    status.signal()
}

#[cfg(not(unix))]
fn termination_signal(_status: &ExitStatus) -> Option<i32> {
    None
}
