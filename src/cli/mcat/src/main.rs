/* src/cli/mcat/src/main.rs */

mod check;
mod config;
mod render;

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use mcat_loader::EmitMode;
use tracing_subscriber::EnvFilter;

use crate::render::RenderOptions;

#[derive(Parser)]
#[command(name = "mcat", version, about = "Render and check the MCAT panel's script includes")]
struct Cli {
  /// Path to mcat.toml (default: nearest one above the current directory)
  #[arg(long, global = true)]
  config: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Render the include block for the page
  Render {
    /// Emit mode: markup or document-write (default: loader.mode)
    #[arg(long, value_parser = parse_mode)]
    mode: Option<EmitMode>,
    /// Wrap the includes in a full HTML document
    #[arg(long)]
    document: bool,
    /// Write to a file instead of stdout
    #[arg(long, short)]
    out: Option<PathBuf>,
  },
  /// Print the activation order, one load reference per line
  Order,
  /// Verify every module exists under the module directory
  Check {
    /// Directory the page is served from (default: the config's directory)
    #[arg(long)]
    root: Option<PathBuf>,
  },
}

fn parse_mode(s: &str) -> Result<EmitMode, String> {
  s.parse().map_err(|e: mcat_loader::LoaderError| e.to_string())
}

fn main() -> Result<()> {
  // RUST_LOG=debug shows every emitted module
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
    .with_writer(std::io::stderr)
    .init();

  let cli = Cli::parse();
  let cwd = std::env::current_dir().context("failed to read current directory")?;
  let (config, project_dir) = config::resolve_config(cli.config.as_deref(), &cwd)?;
  let mut stdout = std::io::stdout().lock();

  match cli.command {
    Command::Render { mode, document, out } => {
      let text = render::render(&config, &RenderOptions { mode, document })?;
      render::write_output(&text, out.as_deref(), &mut stdout)?;
    }
    Command::Order => {
      for line in render::order_lines(&config)? {
        writeln!(stdout, "{line}").context("failed to write to stdout")?;
      }
    }
    Command::Check { root } => {
      let root = root.unwrap_or(project_dir);
      let count = check::run_check(&config, &root)?;
      let module_dir = root.join(&config.loader.base_dir);
      writeln!(stdout, "{count} module(s) present under {}", module_dir.display())
        .context("failed to write to stdout")?;
    }
  }
  Ok(())
}
