/* src/cli/mcat/src/config/loader.rs */

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, info};

use super::types::McatConfig;

pub const CONFIG_FILE: &str = "mcat.toml";

/// Walk from `start` up through its ancestors looking for mcat.toml.
pub fn find_mcat_config(start: &Path) -> Option<PathBuf> {
  start.ancestors().map(|dir| dir.join(CONFIG_FILE)).find(|candidate| candidate.is_file())
}

pub fn load_mcat_config(path: &Path) -> Result<McatConfig> {
  let content =
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;
  let config: McatConfig =
    toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))?;
  config.validate().with_context(|| format!("invalid config {}", path.display()))?;
  debug!(path = %path.display(), project = %config.project.name, "loaded config");
  Ok(config)
}

/// Pick the configuration for a run: an explicit path, else the nearest
/// mcat.toml above `cwd`, else the built-in one. Returns the config and the
/// project directory module paths are resolved against.
pub fn resolve_config(explicit: Option<&Path>, cwd: &Path) -> Result<(McatConfig, PathBuf)> {
  let path = match explicit {
    Some(p) => Some(p.to_path_buf()),
    None => find_mcat_config(cwd),
  };
  config_or_builtin(path.as_deref(), cwd)
}

/// Load `path` if there is one, else fall back to the built-in config rooted
/// at `cwd`.
pub fn config_or_builtin(path: Option<&Path>, cwd: &Path) -> Result<(McatConfig, PathBuf)> {
  match path {
    Some(path) => {
      let config = load_mcat_config(path)?;
      let project_dir = path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
      Ok((config, project_dir))
    }
    None => {
      info!("no {CONFIG_FILE} found, using the built-in panel manifest");
      Ok((McatConfig::builtin(), cwd.to_path_buf()))
    }
  }
}
