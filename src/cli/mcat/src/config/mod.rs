/* src/cli/mcat/src/config/mod.rs */

mod loader;
mod types;

#[cfg(test)]
mod tests;

pub use loader::resolve_config;
#[cfg(test)]
pub use loader::{CONFIG_FILE, config_or_builtin, find_mcat_config, load_mcat_config};
pub use types::McatConfig;
