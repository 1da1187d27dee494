//! Snapshot of the install environment.
//!
//! Every variable the hook consults is read exactly once, through a lookup
//! function, so the rest of the crate works on plain values and tests can
//! describe an environment without touching the process's own.

use crate::{COMPILER_VAR, DESTDIR_VAR, PREFIX_VAR};
use std::env;
use std::ffi::OsString;
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HookEnv {
    /// `MESON_INSTALL_DESTDIR_PREFIX`, if set. Empty values are kept.
    pub prefix: Option<PathBuf>,
    /// Whether `DESTDIR` is present at all; its value is ignored.
    pub destdir_present: bool,
    /// Non-empty `GLIB_COMPILE_SCHEMAS`.
    pub compiler_override: Option<OsString>,
}

impl HookEnv {
    pub fn from_process() -> Self {
        Self::from_lookup(|name| env::var_os(name))
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<OsString>,
    {
        Self {
            prefix: lookup(PREFIX_VAR).map(PathBuf::from),
            destdir_present: lookup(DESTDIR_VAR).is_some(),
            compiler_override: lookup(COMPILER_VAR).filter(|value| !value.is_empty()),
        }
    }
}
