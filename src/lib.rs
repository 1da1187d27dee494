//! Post-install hook for the `dock-from-dash@fthx` GNOME Shell extension.
//!
//! Meson runs the `meson-post-install` binary after copying the extension's
//! files. The hook compiles the installed GSettings schemas into
//! `gschemas.compiled` unless `DESTDIR` says a packager will do that later.

pub mod compiler;
pub mod env;
pub mod error;
pub mod hook;

pub use compiler::SchemaCompiler;
pub use env::HookEnv;
pub use error::HookError;
pub use hook::{InstallHook, Outcome, Plan, schema_dir};

/// Install root handed to post-install scripts by Meson.
pub const PREFIX_VAR: &str = "MESON_INSTALL_DESTDIR_PREFIX";
/// Set by packaging tools that stage into a redirected root.
pub const DESTDIR_VAR: &str = "DESTDIR";
/// Optional override for the schema compiler program.
pub const COMPILER_VAR: &str = "GLIB_COMPILE_SCHEMAS";

pub const DEFAULT_COMPILER: &str = "glib-compile-schemas";
pub const EXTENSION_UUID: &str = "dock-from-dash@fthx";
pub const STATUS_LINE: &str = "Compiling GSettings schemas...";
