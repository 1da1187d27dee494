//! Meson post-install hook for the dock-from-dash extension.
//!
//! Meson runs this with `MESON_INSTALL_DESTDIR_PREFIX` set. Unless `DESTDIR`
//! is present (packagers compile schemas themselves), it runs
//! `glib-compile-schemas` on the installed schema directory and exits with
//! the compiler's status.

use anyhow::Result;
use clap::Parser;
use gschema_install_hook::{HookError, InstallHook};

#[derive(Parser, Debug)]
#[command(name = "meson-post-install")]
#[command(version)]
#[command(
    about = "Compile the extension's GSettings schemas after `meson install`",
    long_about = "Compile the extension's GSettings schemas after `meson install`.\n\n\
        Reads MESON_INSTALL_DESTDIR_PREFIX (required) and DESTDIR (skips compilation when set). \
        GLIB_COMPILE_SCHEMAS overrides the compiler program."
)]
struct Cli {}

fn main() {
    let _cli = Cli::parse();
    if let Err(err) = run() {
        let hook_err = err.downcast_ref::<HookError>();
        // The compiler has already reported its own diagnostics.
        if !matches!(hook_err, Some(HookError::ExternalToolFailure { .. })) {
            eprintln!("meson-post-install: {err:#}");
        }
        std::process::exit(hook_err.map(HookError::exit_code).unwrap_or(1));
    }
}

fn run() -> Result<()> {
    InstallHook::from_process().run()?;
    Ok(())
}
