use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Exit code used when the compiler cannot be found, matching POSIX shells.
pub const NOT_FOUND_EXIT: i32 = 127;

#[derive(Error, Debug)]
pub enum HookError {
    /// A required variable was not set; the hook is running outside Meson.
    #[error("{var} is not set; run this hook from `meson install`")]
    MissingEnvironment { var: &'static str },

    #[error("schema compiler '{program}' not found on PATH")]
    ExternalToolNotFound { program: String },

    /// The compiler ran and reported failure. `code` is `None` when it was
    /// killed by a signal.
    #[error("schema compiler '{program}' failed on {} ({})", dir.display(), describe_code(*code, *signal))]
    ExternalToolFailure {
        program: String,
        dir: PathBuf,
        code: Option<i32>,
        signal: Option<i32>,
    },

    #[error("failed to execute schema compiler '{program}'")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

impl HookError {
    /// Process exit code the hook should terminate with. Never zero.
    pub fn exit_code(&self) -> i32 {
        match self {
            HookError::MissingEnvironment { .. } | HookError::Spawn { .. } => 1,
            HookError::ExternalToolNotFound { .. } => NOT_FOUND_EXIT,
            HookError::ExternalToolFailure { code, signal, .. } => match (code, signal) {
                (Some(code), _) if *code != 0 => *code,
                (_, Some(signal)) => 128 + signal,
                _ => 1,
            },
        }
    }
}

fn describe_code(code: Option<i32>, signal: Option<i32>) -> String {
    match (code, signal) {
        (Some(code), _) => format!("exit code {code}"),
        (None, Some(signal)) => format!("terminated by signal {signal}"),
        (None, None) => "terminated abnormally".to_string(),
    }
}
