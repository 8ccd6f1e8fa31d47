/* src/loader/rust/src/manifest.rs */

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::Result;
use crate::ident::ModuleId;
use crate::injector::Injector;
use crate::order::stable_topo_order;
use crate::stream::LoadStream;

/// Modules of the MCAT tuning panel, in the order the page needs them.
/// Later modules use globals defined by earlier ones.
const PANEL_MODULES: &[&str] = &[
  "config.js",
  "calculations.js",
  "fileProcessing.js",
  "hFileConfig.js",
  "settings.js",
  "formCalculations.js",
  "inner_Parameters.js",
  "inner_CLoop.js",
  "inner_SLoop.js",
  "inner_PoSpeSensor.js",
  "inner_PoSpeBemfDQ.js",
  "inner_CtrlStruc.js",
  "inner_MID.js",
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModuleEntry {
  pub name: ModuleId,
  /// Modules that must be active before this one.
  #[serde(default, skip_serializing_if = "Vec::is_empty")]
  pub after: Vec<ModuleId>,
}

impl ModuleEntry {
  pub fn new(name: ModuleId) -> Self {
    Self { name, after: Vec::new() }
  }

  pub fn after(mut self, deps: impl IntoIterator<Item = ModuleId>) -> Self {
    self.after.extend(deps);
    self
  }
}

/// Ordered list of modules a page includes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Manifest {
  entries: Vec<ModuleEntry>,
}

impl Manifest {
  pub fn new(entries: Vec<ModuleEntry>) -> Self {
    Self { entries }
  }

  /// Manifest without dependency declarations, in the given order.
  pub fn from_names<I, S>(names: I) -> Result<Self>
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    let entries =
      names.into_iter().map(|n| ModuleId::new(n).map(ModuleEntry::new)).collect::<Result<_>>()?;
    Ok(Self { entries })
  }

  /// The built-in MCAT panel manifest.
  pub fn panel() -> Self {
    Self {
      entries: PANEL_MODULES.iter().map(|n| ModuleEntry::new(ModuleId::trusted(n))).collect(),
    }
  }

  pub fn entries(&self) -> &[ModuleEntry] {
    &self.entries
  }

  pub fn len(&self) -> usize {
    self.entries.len()
  }

  pub fn is_empty(&self) -> bool {
    self.entries.is_empty()
  }

  pub fn has_dependencies(&self) -> bool {
    self.entries.iter().any(|e| !e.after.is_empty())
  }

  /// Emit every module in manifest order, one `emit` per entry. Missing files
  /// are not detected here.
  pub fn load_all<S: LoadStream + ?Sized>(&self, injector: &Injector, stream: &mut S) {
    for entry in &self.entries {
      injector.emit(&entry.name, stream);
    }
  }

  /// Activation order. Manifest order unless entries declare `after`, in
  /// which case dependencies come first and ties keep manifest order.
  pub fn resolve_order(&self) -> Result<Vec<&ModuleId>> {
    if !self.has_dependencies() {
      return Ok(self.entries.iter().map(|e| &e.name).collect());
    }
    let order = stable_topo_order(&self.entries)?;
    let ids: Vec<&ModuleId> = order.into_iter().map(|i| &self.entries[i].name).collect();
    let names: Vec<&str> = ids.iter().map(|id| id.as_str()).collect();
    trace!(order = ?names, "resolved module order");
    Ok(ids)
  }

  /// Emit every module in resolved order. Nothing is emitted if the order
  /// cannot be resolved.
  pub fn load_ordered<S: LoadStream + ?Sized>(
    &self,
    injector: &Injector,
    stream: &mut S,
  ) -> Result<()> {
    for id in self.resolve_order()? {
      injector.emit(id, stream);
    }
    Ok(())
  }
}
