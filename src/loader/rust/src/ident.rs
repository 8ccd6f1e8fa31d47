/* src/loader/rust/src/ident.rs */

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{LoaderError, Result};

/// Name of one auxiliary script, extension included (`"config.js"`).
///
/// Identifiers address a file inside the module directory, so they must be
/// relative and may not climb out of it. Nothing else about the name is
/// checked: characters that matter to HTML or JavaScript are handled when the
/// include is emitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ModuleId(String);

impl ModuleId {
  pub fn new(name: impl Into<String>) -> Result<Self> {
    let name = name.into();
    if name.is_empty() {
      return Err(LoaderError::EmptyIdentifier);
    }
    if name.starts_with('/') {
      return Err(LoaderError::InvalidIdentifier { name, reason: "must be a relative path" });
    }
    if name.contains('\\') {
      return Err(LoaderError::InvalidIdentifier { name, reason: "must use '/' as separator" });
    }
    if name.split('/').any(|segment| segment == "..") {
      return Err(LoaderError::InvalidIdentifier {
        name,
        reason: "must not leave the module directory",
      });
    }
    if has_scheme(&name) {
      return Err(LoaderError::InvalidIdentifier { name, reason: "must not be a URL" });
    }
    Ok(Self(name))
  }

  /// Built-in names that are known to be valid.
  pub(crate) fn trusted(name: &str) -> Self {
    Self(name.to_string())
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

/// `scheme:` before the first `/`, as in `https://` or `javascript:`.
pub(crate) fn has_scheme(path: &str) -> bool {
  path.split('/').next().is_some_and(|first| first.contains(':'))
}

impl TryFrom<String> for ModuleId {
  type Error = LoaderError;

  fn try_from(value: String) -> Result<Self> {
    Self::new(value)
  }
}

impl TryFrom<&str> for ModuleId {
  type Error = LoaderError;

  fn try_from(value: &str) -> Result<Self> {
    Self::new(value)
  }
}

impl From<ModuleId> for String {
  fn from(id: ModuleId) -> Self {
    id.0
  }
}

impl AsRef<str> for ModuleId {
  fn as_ref(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for ModuleId {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}

/// Relative path the host resolves for one module: `base_dir/identifier`.
/// Built on demand by the injector and handed straight to the stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadReference(String);

impl LoadReference {
  pub(crate) fn join(base_dir: &str, id: &ModuleId) -> Self {
    let base = base_dir.trim_end_matches('/');
    if base.is_empty() { Self(id.as_str().to_string()) } else { Self(format!("{base}/{id}")) }
  }

  pub fn as_str(&self) -> &str {
    &self.0
  }
}

impl fmt::Display for LoadReference {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(&self.0)
  }
}
