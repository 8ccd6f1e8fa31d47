/* src/cli/mcat/src/render.rs */

// `mcat render` and `mcat order`: include block, full page, activation order.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use mcat_loader::{EmitMode, render_includes, wrap_document};
use tracing::info;

use crate::config::McatConfig;

pub struct RenderOptions {
  /// Overrides `loader.mode` from the config.
  pub mode: Option<EmitMode>,
  /// Wrap the include block in a full HTML document.
  pub document: bool,
}

pub fn render(config: &McatConfig, opts: &RenderOptions) -> Result<String> {
  let mut injector = config.injector();
  if let Some(mode) = opts.mode {
    injector = injector.with_mode(mode);
  }
  let manifest = config.manifest();
  let block = render_includes(&manifest, &injector).context("failed to order modules")?;
  info!(modules = manifest.len(), mode = injector.mode().as_str(), "rendered include block");
  if opts.document {
    Ok(wrap_document(config.page_title(), &block, injector.mode(), &config.page.root_id))
  } else {
    Ok(block)
  }
}

/// Resolved load references, one per line.
pub fn order_lines(config: &McatConfig) -> Result<Vec<String>> {
  let injector = config.injector();
  let manifest = config.manifest();
  let order = manifest.resolve_order().context("failed to order modules")?;
  Ok(order.into_iter().map(|id| injector.load_reference(id).to_string()).collect())
}

/// Write `text` to `out`, or to stdout when `out` is None.
pub fn write_output(text: &str, out: Option<&Path>, stdout: &mut impl Write) -> Result<()> {
  match out {
    Some(path) => {
      if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
      {
        std::fs::create_dir_all(parent)
          .with_context(|| format!("failed to create {}", parent.display()))?;
      }
      std::fs::write(path, format!("{text}\n"))
        .with_context(|| format!("failed to write {}", path.display()))?;
      info!(path = %path.display(), "wrote output");
    }
    None => {
      writeln!(stdout, "{text}").context("failed to write to stdout")?;
    }
  }
  Ok(())
}
