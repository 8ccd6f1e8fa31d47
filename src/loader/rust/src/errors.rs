/* src/loader/rust/src/errors.rs */

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoaderError {
  #[error("module identifier must not be empty")]
  EmptyIdentifier,

  #[error("invalid module identifier \"{name}\": {reason}")]
  InvalidIdentifier { name: String, reason: &'static str },

  #[error("invalid base dir \"{base_dir}\": {reason}")]
  InvalidBaseDir { base_dir: String, reason: &'static str },

  #[error("module \"{module}\" loads after \"{dependency}\", which is not in the manifest")]
  UnknownDependency { module: String, dependency: String },

  #[error("dependency cycle between modules: {}", .modules.join(", "))]
  DependencyCycle { modules: Vec<String> },

  #[error("module \"{0}\" appears more than once in the manifest")]
  DuplicateModule(String),

  #[error("unknown emit mode \"{0}\" (expected \"markup\" or \"document-write\")")]
  UnknownMode(String),
}

pub type Result<T> = std::result::Result<T, LoaderError>;
