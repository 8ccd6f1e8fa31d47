/* src/loader/rust/src/injector.rs */

use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::{LoaderError, Result};
use crate::escape::{escape_html, escape_js_string};
use crate::ident::{LoadReference, ModuleId, has_scheme};
use crate::stream::LoadStream;

/// Directory the panel's modules live in, relative to the page.
pub const DEFAULT_BASE_DIR: &str = "JS_functions";
pub const DEFAULT_SCRIPT_TYPE: &str = "text/javascript";

// Closing tag inside a JavaScript string. The backslash keeps the HTML parser
// from ending the enclosing inline script early.
const JS_SCRIPT_CLOSE: &str = r"<\/script>";

/// How an include is written into the stream.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmitMode {
  /// `<script src="...">` elements placed directly in the page markup.
  #[default]
  Markup,
  /// `document.write(...)` statements, for use inside an inline script that
  /// runs during initial parse.
  DocumentWrite,
}

impl EmitMode {
  pub fn as_str(self) -> &'static str {
    match self {
      Self::Markup => "markup",
      Self::DocumentWrite => "document-write",
    }
  }
}

impl FromStr for EmitMode {
  type Err = LoaderError;

  fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
    match s {
      "markup" => Ok(Self::Markup),
      "document-write" => Ok(Self::DocumentWrite),
      other => Err(LoaderError::UnknownMode(other.to_string())),
    }
  }
}

/// Turns a module identifier into a script include and appends it to the
/// load stream. Holds settings only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Injector {
  base_dir: String,
  script_type: String,
  mode: EmitMode,
}

impl Default for Injector {
  fn default() -> Self {
    Self::new(DEFAULT_BASE_DIR)
  }
}

impl Injector {
  pub fn new(base_dir: impl Into<String>) -> Self {
    Self {
      base_dir: base_dir.into(),
      script_type: DEFAULT_SCRIPT_TYPE.to_string(),
      mode: EmitMode::default(),
    }
  }

  /// Like `new`, for base dirs that come from outside the program. The base
  /// dir must be a non-empty relative path inside the page's directory, so
  /// every load reference stays a sibling of the page.
  pub fn try_new(base_dir: impl Into<String>) -> Result<Self> {
    let base_dir = base_dir.into();
    let invalid = |reason| LoaderError::InvalidBaseDir { base_dir: base_dir.clone(), reason };
    let trimmed = base_dir.trim_end_matches('/');
    if trimmed.is_empty() {
      return Err(invalid("must not be empty"));
    }
    if trimmed.starts_with('/') {
      return Err(invalid("must be relative to the page"));
    }
    if trimmed.contains('\\') {
      return Err(invalid("must use '/' as separator"));
    }
    if trimmed.split('/').any(|segment| segment == "..") {
      return Err(invalid("must not contain '..'"));
    }
    if has_scheme(trimmed) {
      return Err(invalid("must not be a URL"));
    }
    Ok(Self::new(base_dir))
  }

  pub fn with_mode(mut self, mode: EmitMode) -> Self {
    self.mode = mode;
    self
  }

  pub fn with_script_type(mut self, script_type: impl Into<String>) -> Self {
    self.script_type = script_type.into();
    self
  }

  pub fn base_dir(&self) -> &str {
    &self.base_dir
  }

  pub fn mode(&self) -> EmitMode {
    self.mode
  }

  pub fn load_reference(&self, id: &ModuleId) -> LoadReference {
    LoadReference::join(&self.base_dir, id)
  }

  /// The text `emit` appends for `id`.
  pub fn fragment(&self, id: &ModuleId) -> String {
    let reference = self.load_reference(id);
    let src = escape_html(reference.as_str());
    let script_type = escape_html(&self.script_type);
    match self.mode {
      EmitMode::Markup => format!(r#"<script type="{script_type}" src="{src}"></script>"#),
      EmitMode::DocumentWrite => format!(
        r#"document.write("<script type=\"{}\" src=\"{}\">{JS_SCRIPT_CLOSE}");"#,
        escape_js_string(&script_type),
        escape_js_string(&src),
      ),
    }
  }

  /// Append the include for `id` to `stream`. The fragment is in the stream
  /// when this returns. Whether the file exists is left to the host.
  pub fn emit<S: LoadStream + ?Sized>(&self, id: &ModuleId, stream: &mut S) {
    let fragment = self.fragment(id);
    debug!(module = %id, mode = self.mode.as_str(), "emit module include");
    stream.push_fragment(&fragment);
  }
}
