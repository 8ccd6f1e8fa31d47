/* src/loader/rust/src/document.rs */

use crate::errors::Result;
use crate::escape::escape_html;
use crate::injector::{EmitMode, Injector};
use crate::manifest::Manifest;

/// Render the include block for `manifest`, one fragment per line, in
/// resolved order.
pub fn render_includes(manifest: &Manifest, injector: &Injector) -> Result<String> {
  let mut fragments: Vec<String> = Vec::with_capacity(manifest.len());
  manifest.load_ordered(injector, &mut fragments)?;
  Ok(fragments.join("\n"))
}

/// Wrap an include block in a compact HTML5 document. The block sits at the
/// end of `<head>` so every module is requested, in order, before the body
/// is parsed. `DocumentWrite` blocks are wrapped in one inline script.
pub fn wrap_document(title: &str, include_block: &str, mode: EmitMode, root_id: &str) -> String {
  let mut doc = String::from("<!DOCTYPE html><html><head><meta charset=\"utf-8\">");
  doc.push_str(&format!("<title>{}</title>", escape_html(title)));
  if !include_block.is_empty() {
    match mode {
      EmitMode::Markup => doc.push_str(include_block),
      EmitMode::DocumentWrite => {
        doc.push_str("<script>");
        doc.push_str(include_block);
        doc.push_str("</script>");
      }
    }
  }
  doc.push_str(&format!("</head><body><div id=\"{}\"></div></body></html>", escape_html(root_id)));
  doc
}
