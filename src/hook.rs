//! The post-install sequence: resolve the schema directory, decide whether a
//! packager owns compilation, and otherwise run the compiler once.

use crate::compiler::SchemaCompiler;
use crate::env::HookEnv;
use crate::error::HookError;
use crate::{EXTENSION_UUID, PREFIX_VAR, STATUS_LINE};
use std::path::{Path, PathBuf};

/// `<prefix>/share/gnome-shell/extensions/dock-from-dash@fthx/schemas`
pub fn schema_dir(prefix: &Path) -> PathBuf {
    prefix
        .join("share")
        .join("gnome-shell")
        .join("extensions")
        .join(EXTENSION_UUID)
        .join("schemas")
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Plan {
    /// `DESTDIR` is set; the packager compiles schemas in its own pass.
    Skip,
    Compile { schema_dir: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Skipped,
    Compiled { schema_dir: PathBuf },
}

pub struct InstallHook {
    env: HookEnv,
    compiler: SchemaCompiler,
}

impl InstallHook {
    pub fn new(env: HookEnv) -> Self {
        let compiler = SchemaCompiler::from_env(&env);
        Self { env, compiler }
    }

    pub fn from_process() -> Self {
        Self::new(HookEnv::from_process())
    }

    /// The prefix is required even on the skip path.
    pub fn plan(env: &HookEnv) -> Result<Plan, HookError> {
        let prefix = env
            .prefix
            .as_deref()
            .ok_or(HookError::MissingEnvironment { var: PREFIX_VAR })?;
        if env.destdir_present {
            return Ok(Plan::Skip);
        }
        Ok(Plan::Compile {
            schema_dir: schema_dir(prefix),
        })
    }

    pub fn run(&self) -> Result<Outcome, HookError> {
        match Self::plan(&self.env)? {
            Plan::Skip => Ok(Outcome::Skipped),
            Plan::Compile { schema_dir } => {
                println!("{STATUS_LINE}");
                self.compiler.compile(&schema_dir)?;
                Ok(Outcome::Compiled { schema_dir })
            }
        }
    }
}
