#![allow(dead_code)]

use anyhow::{Context, Result};
use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::sync::{Mutex, MutexGuard, OnceLock};

/// Records `$#` followed by each argument, one per line, then exits with
/// `$STUB_EXIT` (default 0). Uses only shell builtins so tests can clear PATH.
pub const RECORDING_COMPILER: &str = r#"#!/bin/sh
printf '%s\n' "$#" "$@" >> "$MARK_FILE"
exit "${STUB_EXIT:-0}"
"#;

pub fn hook_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_meson-post-install"))
}

/// A hook command with an empty environment; tests add only what they need.
pub fn hook_command() -> Command {
    let mut cmd = Command::new(hook_binary());
    cmd.env_clear();
    cmd
}

pub fn run_command(mut cmd: Command) -> Result<Output> {
    cmd.output()
        .with_context(|| format!("failed to execute {:?}", cmd.get_program()))
}

pub fn make_executable(path: &Path) -> Result<()> {
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

pub fn install_stub(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    let path = dir.join(name);
    fs::write(&path, contents)
        .with_context(|| format!("failed to write stub at {}", path.display()))?;
    make_executable(&path)?;
    Ok(path)
}

/// Arguments written by `RECORDING_COMPILER`, one vector per invocation.
pub fn recorded_invocations(mark: &Path) -> Result<Vec<Vec<String>>> {
    if !mark.exists() {
        return Ok(Vec::new());
    }
    let contents = fs::read_to_string(mark)?;
    let mut lines = contents.lines();
    let mut calls = Vec::new();
    while let Some(count) = lines.next() {
        let count: usize = count.parse().context("malformed argument count")?;
        let args = lines.by_ref().take(count).map(str::to_string).collect();
        calls.push(args);
    }
    Ok(calls)
}

// Serializes tests that write and then exec stub scripts so a concurrent fork
// cannot hold a stub open for writing (ETXTBSY).
pub struct StubGuard {
    _guard: MutexGuard<'static, ()>,
}

pub fn stub_guard() -> StubGuard {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    let mutex = LOCK.get_or_init(|| Mutex::new(()));
    let guard = mutex.lock().unwrap_or_else(|err| err.into_inner());
    StubGuard { _guard: guard }
}
