/* src/loader/wasm/src/lib.rs */

// Errors cross into JS as plain strings.

use mcat_loader::{DEFAULT_BASE_DIR, EmitMode, Injector, LoaderError, Manifest, render_includes};
use serde_json::Value;
use wasm_bindgen::prelude::*;

fn parse_mode(mode: &str) -> Result<EmitMode, String> {
  mode.parse().map_err(|e: LoaderError| e.to_string())
}

fn render_manifest(config_json: &str, mode: &str) -> Result<String, String> {
  let mode = parse_mode(mode)?;
  let config: Value =
    serde_json::from_str(config_json).map_err(|e| format!("parse config: {e}"))?;
  let base_dir = config.get("base_dir").and_then(Value::as_str).unwrap_or(DEFAULT_BASE_DIR);
  let manifest: Manifest = match config.get("modules") {
    Some(modules) => {
      serde_json::from_value(modules.clone()).map_err(|e| format!("parse modules: {e}"))?
    }
    None => Manifest::panel(),
  };
  let injector = Injector::try_new(base_dir).map_err(|e| e.to_string())?.with_mode(mode);
  render_includes(&manifest, &injector).map_err(|e| e.to_string())
}

fn render_panel(mode: &str) -> Result<String, String> {
  let injector = Injector::default().with_mode(parse_mode(mode)?);
  render_includes(&Manifest::panel(), &injector).map_err(|e| e.to_string())
}

/// Render the include block for a manifest given as JSON:
/// `{"base_dir": "JS_functions", "modules": [{"name": "config.js"}]}`.
/// `base_dir` defaults to `JS_functions`.
#[wasm_bindgen]
pub fn render_manifest_includes(config_json: &str, mode: &str) -> Result<String, JsValue> {
  render_manifest(config_json, mode).map_err(|e| JsValue::from_str(&e))
}

/// Render the include block of the built-in panel manifest.
#[wasm_bindgen]
pub fn panel_includes(mode: &str) -> Result<String, JsValue> {
  render_panel(mode).map_err(|e| JsValue::from_str(&e))
}
