use crate::api::{Scope, ValorApi, ValorPaths};
use crate::config::ValorConfig;
use crate::store::Source;
use directories::{BaseDirs, ProjectDirs};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const PROJECT_DIR_NAME: &str = ".valor";

pub struct ValorContext {
    pub api: ValorApi<Source>,
    pub scope: Scope,
    pub config: ValorConfig,
}

/// Find the project root by walking up from cwd looking for a directory that
/// holds a `.valor` directory. Stops at the home directory or the filesystem root.
pub fn find_project_root(cwd: &Path) -> Option<PathBuf> {
    let home_dir = BaseDirs::new().map(|bd| bd.home_dir().to_path_buf());
    let mut current = cwd.to_path_buf();

    loop {
        if current.join(PROJECT_DIR_NAME).is_dir() {
            return Some(current);
        }

        if let Some(ref home) = home_dir {
            if &current == home {
                return None;
            }
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent.to_path_buf();
            }
            _ => return None,
        }
    }
}

/// Resolves paths and configuration and builds the API.
///
/// `data_override` replaces the configured data source for this invocation only.
/// Relative data locations resolve against the project root when there is one,
/// else against `cwd`.
pub fn initialize(cwd: &Path, use_global: bool, data_override: Option<&str>) -> ValorContext {
    let project_root = find_project_root(cwd);
    let base_dir = project_root.clone().unwrap_or_else(|| cwd.to_path_buf());
    let project_dir = project_root.as_ref().map(|root| root.join(PROJECT_DIR_NAME));

    let global_dir = ProjectDirs::from("org", "valor", "valor")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .unwrap_or_else(|| cwd.join(PROJECT_DIR_NAME));

    // Outside a project only the user's config exists.
    let scope = if use_global || project_dir.is_none() {
        Scope::Global
    } else {
        Scope::Project
    };

    let config_dir = match (&scope, &project_dir) {
        (Scope::Project, Some(dir)) => dir.clone(),
        _ => global_dir.clone(),
    };
    let config = match ValorConfig::load(&config_dir) {
        Ok(config) => config,
        Err(e) => {
            warn!(error = %e, "ignoring unreadable config, using defaults");
            ValorConfig::default()
        }
    };

    let location = data_override.unwrap_or(&config.data_source);
    let source = Source::from_location(location, &base_dir);
    debug!(config_dir = %config_dir.display(), source = %location, "initialized context");

    let paths = ValorPaths {
        project: project_dir,
        global: global_dir,
    };
    let api = ValorApi::new(source, config.clone(), paths);

    ValorContext { api, scope, config }
}
