/* src/cli/mcat/src/check.rs */

// `mcat check`: verify every manifest module exists on disk before the page
// ships. Emission itself never looks at the filesystem.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use tracing::debug;

use crate::config::McatConfig;

/// Paths of manifest modules that are not regular files under
/// `root/<base_dir>`, in activation order.
pub fn find_missing(config: &McatConfig, root: &Path) -> Result<Vec<PathBuf>> {
  let manifest = config.manifest();
  let order = manifest.resolve_order().context("failed to order modules")?;
  let module_dir = root.join(&config.loader.base_dir);
  let mut missing = Vec::new();
  for id in order {
    let path = module_dir.join(id.as_str());
    debug!(path = %path.display(), "checking module");
    if !path.is_file() {
      missing.push(path);
    }
  }
  Ok(missing)
}

/// Fail with every missing module listed. Returns the number of modules
/// checked on success.
pub fn run_check(config: &McatConfig, root: &Path) -> Result<usize> {
  let missing = find_missing(config, root)?;
  if !missing.is_empty() {
    let list: Vec<String> = missing.iter().map(|p| p.display().to_string()).collect();
    bail!("{} module(s) missing:\n  {}", missing.len(), list.join("\n  "));
  }
  Ok(config.manifest().len())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn touch_modules(root: &Path, base_dir: &str, names: &[&str]) {
    let dir = root.join(base_dir);
    std::fs::create_dir_all(&dir).unwrap();
    for name in names {
      std::fs::write(dir.join(name), "// module").unwrap();
    }
  }

  #[test]
  fn all_panel_modules_present() {
    let tmp = tempfile::tempdir().unwrap();
    let config = McatConfig::builtin();
    let names: Vec<String> =
      config.manifest().entries().iter().map(|e| e.name.to_string()).collect();
    let names: Vec<&str> = names.iter().map(String::as_str).collect();
    touch_modules(tmp.path(), "JS_functions", &names);

    assert!(find_missing(&config, tmp.path()).unwrap().is_empty());
    assert_eq!(run_check(&config, tmp.path()).unwrap(), 13);
  }

  #[test]
  fn reports_every_missing_module() {
    let tmp = tempfile::tempdir().unwrap();
    touch_modules(tmp.path(), "JS_functions", &["config.js", "settings.js"]);
    let config: McatConfig = toml::from_str(
      r#"
[project]
name = "x"

[[modules]]
name = "config.js"

[[modules]]
name = "calculations.js"

[[modules]]
name = "settings.js"

[[modules]]
name = "inner_MID.js"
"#,
    )
    .unwrap();

    let missing = find_missing(&config, tmp.path()).unwrap();
    assert_eq!(
      missing,
      vec![
        tmp.path().join("JS_functions/calculations.js"),
        tmp.path().join("JS_functions/inner_MID.js"),
      ]
    );

    let err = run_check(&config, tmp.path()).unwrap_err().to_string();
    assert!(err.starts_with("2 module(s) missing"));
    assert!(err.contains("calculations.js"));
    assert!(err.contains("inner_MID.js"));
  }

  #[test]
  fn directory_is_not_a_module() {
    let tmp = tempfile::tempdir().unwrap();
    std::fs::create_dir_all(tmp.path().join("JS_functions/config.js")).unwrap();
    let config: McatConfig =
      toml::from_str("[project]\nname = \"x\"\n\n[[modules]]\nname = \"config.js\"\n").unwrap();
    assert_eq!(find_missing(&config, tmp.path()).unwrap().len(), 1);
  }

  #[test]
  fn empty_manifest_passes() {
    let tmp = tempfile::tempdir().unwrap();
    let config: McatConfig = toml::from_str("project = { name = \"x\" }\nmodules = []\n").unwrap();
    assert_eq!(run_check(&config, tmp.path()).unwrap(), 0);
  }
}
