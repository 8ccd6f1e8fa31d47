/* src/cli/mcat/src/config/types.rs */

use anyhow::{Context, Result, bail};
use mcat_loader::{
  DEFAULT_BASE_DIR, DEFAULT_SCRIPT_TYPE, EmitMode, Injector, Manifest, ModuleEntry,
};
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct McatConfig {
  pub project: ProjectConfig,
  #[serde(default)]
  pub loader: LoaderSection,
  #[serde(default)]
  pub page: PageSection,
  /// Absent means the built-in panel manifest.
  #[serde(default)]
  pub modules: Option<Vec<ModuleEntry>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProjectConfig {
  pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoaderSection {
  #[serde(default = "default_base_dir")]
  pub base_dir: String,
  #[serde(default)]
  pub mode: EmitMode,
  #[serde(default = "default_script_type")]
  pub script_type: String,
}

impl Default for LoaderSection {
  fn default() -> Self {
    Self {
      base_dir: default_base_dir(),
      mode: EmitMode::default(),
      script_type: default_script_type(),
    }
  }
}

fn default_base_dir() -> String {
  DEFAULT_BASE_DIR.to_string()
}

fn default_script_type() -> String {
  DEFAULT_SCRIPT_TYPE.to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageSection {
  pub title: Option<String>,
  #[serde(default = "default_root_id")]
  pub root_id: String,
}

impl Default for PageSection {
  fn default() -> Self {
    Self { title: None, root_id: default_root_id() }
  }
}

fn default_root_id() -> String {
  "mcat".to_string()
}

impl McatConfig {
  /// Configuration used when no mcat.toml exists: the panel manifest under
  /// `JS_functions`.
  pub fn builtin() -> Self {
    Self {
      project: ProjectConfig { name: "mcat".to_string() },
      loader: LoaderSection::default(),
      page: PageSection::default(),
      modules: None,
    }
  }

  pub fn manifest(&self) -> Manifest {
    match &self.modules {
      Some(entries) => Manifest::new(entries.clone()),
      None => Manifest::panel(),
    }
  }

  pub fn injector(&self) -> Injector {
    Injector::new(&self.loader.base_dir)
      .with_mode(self.loader.mode)
      .with_script_type(&self.loader.script_type)
  }

  pub fn page_title(&self) -> &str {
    self.page.title.as_deref().unwrap_or(&self.project.name)
  }

  pub fn validate(&self) -> Result<()> {
    Injector::try_new(&self.loader.base_dir)?;
    if self.loader.script_type.is_empty() {
      bail!("loader.script_type must not be empty");
    }
    self.manifest().resolve_order().context("invalid [[modules]] dependencies")?;
    Ok(())
  }
}
