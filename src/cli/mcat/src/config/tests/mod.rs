/* src/cli/mcat/src/config/tests/mod.rs */

use super::*;


#[test]
fn minimal_config_uses_defaults() {
  let config: McatConfig = toml::from_str(
    r#"
[project]
name = "pmsm-tuning"
"#,
  )
  .unwrap();
  assert_eq!(config.loader.base_dir, "JS_functions");
  assert_eq!(config.loader.mode, mcat_loader::EmitMode::Markup);
  assert_eq!(config.loader.script_type, "text/javascript");
  assert_eq!(config.page.root_id, "mcat");
  assert_eq!(config.page_title(), "pmsm-tuning");
  assert!(config.modules.is_none());
  assert_eq!(config.manifest(), mcat_loader::Manifest::panel());
  config.validate().unwrap();
}

#[test]
fn full_config() {
  let config: McatConfig = toml::from_str(
    r#"
[project]
name = "pmsm-tuning"

[loader]
base_dir = "scripts"
mode = "document-write"
script_type = "module"

[page]
title = "Motor Control Tuning"
root_id = "app"

[[modules]]
name = "config.js"

[[modules]]
name = "calculations.js"
after = ["config.js"]
"#,
  )
  .unwrap();
  assert_eq!(config.loader.mode, mcat_loader::EmitMode::DocumentWrite);
  assert_eq!(config.page_title(), "Motor Control Tuning");
  let manifest = config.manifest();
  assert_eq!(manifest.len(), 2);
  assert!(manifest.has_dependencies());

  let injector = config.injector();
  assert_eq!(injector.base_dir(), "scripts");
  let id = &manifest.entries()[0].name;
  assert_eq!(injector.load_reference(id).as_str(), "scripts/config.js");
  config.validate().unwrap();
}

#[test]
fn unknown_mode_rejected() {
  let result: Result<McatConfig, _> = toml::from_str(
    r#"
[project]
name = "x"

[loader]
mode = "async"
"#,
  );
  assert!(result.is_err());
}

#[test]
fn empty_module_name_rejected() {
  let result: Result<McatConfig, _> = toml::from_str(
    r#"
[project]
name = "x"

[[modules]]
name = ""
"#,
  );
  assert!(result.is_err());
}

#[test]
fn empty_module_list_is_legal() {
  let config: McatConfig = toml::from_str(
    r#"
project = { name = "x" }
modules = []
"#,
  )
  .unwrap();
  assert!(config.manifest().is_empty());
  config.validate().unwrap();
}

#[test]
fn validate_rejects_bad_base_dir() {
  for (base_dir, needle) in [
    ("", "must not be empty"),
    ("/srv/js", "must be relative"),
    ("../js", "'..'"),
    ("https://cdn.example/js", "must not be a URL"),
  ] {
    let mut config = McatConfig::builtin();
    config.loader.base_dir = base_dir.to_string();
    let err = config.validate().unwrap_err();
    assert!(err.to_string().contains(needle), "{base_dir}: {err}");
  }
}

#[test]
fn validate_rejects_dependency_cycle() {
  let config: McatConfig = toml::from_str(
    r#"
[project]
name = "x"

[[modules]]
name = "a.js"
after = ["b.js"]

[[modules]]
name = "b.js"
after = ["a.js"]
"#,
  )
  .unwrap();
  let err = config.validate().unwrap_err();
  assert!(format!("{err:#}").contains("dependency cycle"));
}
